/// One menu selection, mapped from the numeric code the user typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MenuChoice {
    Exit,
    AddToWarehouse,
    MoveToShelf,
    SearchWarehouse,
    SearchShelf,
    Reprice,
    RemoveFromWarehouse,
    RemoveFromShelf,
    DeleteFromWarehouse,
    DeleteFromShelf,
    ListWarehouse,
    ListShelf,
}

/// Menu labels, indexed by their numeric code.
pub(super) const OPTIONS: [&str; 12] = [
    "Exit",
    "Add a product to the warehouse",
    "Move a product to the shelf",
    "Search the warehouse by product ID",
    "Search the shelf by product ID",
    "Update the price of a shelf product",
    "Remove quantity from a warehouse product",
    "Remove quantity from a shelf product",
    "Delete a product from the warehouse",
    "Delete a product from the shelf",
    "List every product in the warehouse",
    "List every product on the shelf",
];

pub(super) fn parse(line: &str) -> Option<MenuChoice> {
    let code: u32 = line.trim().parse().ok()?;
    MenuChoice::from_code(code)
}

impl MenuChoice {
    fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(MenuChoice::Exit),
            1 => Some(MenuChoice::AddToWarehouse),
            2 => Some(MenuChoice::MoveToShelf),
            3 => Some(MenuChoice::SearchWarehouse),
            4 => Some(MenuChoice::SearchShelf),
            5 => Some(MenuChoice::Reprice),
            6 => Some(MenuChoice::RemoveFromWarehouse),
            7 => Some(MenuChoice::RemoveFromShelf),
            8 => Some(MenuChoice::DeleteFromWarehouse),
            9 => Some(MenuChoice::DeleteFromShelf),
            10 => Some(MenuChoice::ListWarehouse),
            11 => Some(MenuChoice::ListShelf),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_menu_code() {
        assert_eq!(parse("0"), Some(MenuChoice::Exit));
        assert_eq!(parse(" 2 "), Some(MenuChoice::MoveToShelf));
        assert_eq!(parse("11"), Some(MenuChoice::ListShelf));
    }

    #[test]
    fn rejects_out_of_range_and_non_numeric_input() {
        assert_eq!(parse("12"), None);
        assert_eq!(parse("-1"), None);
        assert_eq!(parse("two"), None);
        assert_eq!(parse(""), None);
    }
}
