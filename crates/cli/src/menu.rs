/// One entry of the main menu.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    RemoveByName,
    RemoveById,
    List,
    Search,
    Exit,
}

impl MenuChoice {
    /// Menu order.
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::Add,
        MenuChoice::RemoveByName,
        MenuChoice::RemoveById,
        MenuChoice::List,
        MenuChoice::Search,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> u8 {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::RemoveByName => 2,
            MenuChoice::RemoveById => 3,
            MenuChoice::List => 4,
            MenuChoice::Search => 5,
            MenuChoice::Exit => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add product",
            MenuChoice::RemoveByName => "Remove product by name",
            MenuChoice::RemoveById => "Remove product by id",
            MenuChoice::List => "List products",
            MenuChoice::Search => "Search products",
            MenuChoice::Exit => "Exit",
        }
    }

    /// `None` for anything that is not one of the listed numbers.
    pub fn parse(input: &str) -> Option<Self> {
        let number = input.trim().parse::<u8>().ok()?;
        Self::ALL.into_iter().find(|c| c.number() == number)
    }
}
