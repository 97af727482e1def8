use super::*;
use crate::input::InputError;

#[test]
fn test_from_text_splits_header_and_rows() {
    let table = Table::from_text("id,symbol,padj\nG1,Foxp3,0.01\nG2,Gata3,0.2\n").unwrap();
    assert_eq!(table.header, vec!["id", "symbol", "padj"]);
    assert_eq!(table.n_rows(), 2);
    assert_eq!(table.n_columns(), 3);
}

#[test]
fn test_fields_trimmed_at_load() {
    let table = Table::from_text(" id , symbol \n G1 ,  Foxp3 \n").unwrap();
    assert_eq!(table.header, vec!["id", "symbol"]);
    assert_eq!(table.rows[0], vec!["G1", "Foxp3"]);
}

#[test]
fn test_row_key_is_second_column() {
    let table = Table::from_text("id,symbol\nENS1,Foxp3\n").unwrap();
    assert_eq!(row_key(&table.rows[0]), "Foxp3");
}

#[test]
fn test_row_key_of_short_row_is_empty() {
    let row = vec!["only".to_string()];
    assert_eq!(row_key(&row), "");
}

#[test]
fn test_empty_text_is_empty_input_error() {
    match Table::from_text("\n  \n") {
        Err(InputError::EmptyInput(_)) => {}
        other => panic!("expected EmptyInput, got {other:?}"),
    }
}

#[test]
fn test_ragged_rows_are_kept() {
    let table = Table::from_text("a,b,c\n1,2\n1,2,3,4\n").unwrap();
    assert_eq!(table.rows[0].len(), 2);
    assert_eq!(table.rows[1].len(), 4);
}
