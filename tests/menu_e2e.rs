use assert_cmd::Command;
use predicates::prelude::*;

fn stockctl_cmd() -> Command {
    Command::cargo_bin("stockctl").unwrap()
}

#[test]
fn test_add_move_list_session() {
    // Add a widget, move part of it to the shelf, list both containers.
    let session = [
        "1", "123456", "654321", "Groceries", "Widget", "10", // add
        "2", "123456", "4", "3.50", // move, new shelf entry
        "10", // list warehouse
        "11", // list shelf
        "0",
    ]
    .join("\n")
        + "\n";

    stockctl_cmd()
        .arg("--plain")
        .write_stdin(session)
        .assert()
        .success()
        .stdout(predicate::str::contains("Product added to the warehouse."))
        .stdout(predicate::str::contains("Product moved to the shelf."))
        .stdout(predicate::str::contains("Products in the warehouse:"))
        .stdout(predicate::str::contains("Quantity in the warehouse: 6"))
        .stdout(predicate::str::contains("Products on the shelf:"))
        .stdout(predicate::str::contains("Price: 3.5"))
        .stdout(predicate::str::contains("Quantity on the shelf: 4"))
        .stdout(predicate::str::contains("Done."));
}

#[test]
fn test_invalid_menu_option_reprompts() {
    stockctl_cmd()
        .arg("--plain")
        .write_stdin("99\ntwo\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid option."));
}

#[test]
fn test_data_errors_go_to_stderr_and_the_loop_continues() {
    // Searching an empty warehouse fails, but the program still exits
    // normally through the menu.
    stockctl_cmd()
        .arg("--plain")
        .write_stdin("3\n123456\n0\n")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Product 123456 not found in the warehouse",
        ))
        .stdout(predicate::str::contains("Done."));
}

#[test]
fn test_insufficient_move_leaves_stock_untouched() {
    let session = [
        "1", "123456", "654321", "Groceries", "Widget", "5", // add
        "2", "123456", "9", // move more than stored
        "10", // list warehouse
        "0",
    ]
    .join("\n")
        + "\n";

    stockctl_cmd()
        .arg("--plain")
        .write_stdin(session)
        .assert()
        .success()
        .stderr(predicate::str::contains("only 5 stored"))
        .stdout(predicate::str::contains("Quantity in the warehouse: 5"));
}
