mod common;

use booru_query::{
    compile, resolve_order_column, OrderColumn, OrderDirection, QueryError, Token,
};
use common::*;

#[test]
fn every_order_key_maps_to_its_column() {
    let cases = [
        ("id", OrderColumn::Id),
        ("fav_time", OrderColumn::FavTime),
        ("fav_count", OrderColumn::FavCount),
        ("tag_count", OrderColumn::TagCount),
        ("time", OrderColumn::LastEditTime),
        ("score", OrderColumn::Score),
    ];

    for (token, column) in cases {
        assert_eq!(resolve_order_column(token).unwrap(), column);
    }
}

#[test]
fn unknown_order_key_is_rejected() {
    let err = resolve_order_column("bogus").unwrap_err();
    assert_eq!(err, QueryError::UnsupportedKey("bogus".to_string()));
}

#[test]
fn order_token_sets_the_filter_ordering() {
    let filter = compile(&[Token::named("order", "score")], &fixed_context()).unwrap();
    assert!(filter.requirements.is_empty());

    let ordering = filter.ordering.expect("ordering should be set");
    assert_eq!(ordering.column, OrderColumn::Score);
    assert_eq!(ordering.direction, OrderDirection::Descending);
}

#[test]
fn negated_order_token_sorts_ascending() {
    let tokens = [Token::named("order", "fav_count").negate()];
    let filter = compile(&tokens, &fixed_context()).unwrap();

    let ordering = filter.ordering.unwrap();
    assert_eq!(ordering.column, OrderColumn::FavCount);
    assert_eq!(ordering.direction, OrderDirection::Ascending);
}

#[test]
fn ordering_defaults_to_none() {
    let filter = compile(&[Token::plain("red")], &fixed_context()).unwrap();
    assert!(filter.ordering.is_none());
}

#[test]
fn later_order_token_wins() {
    let tokens = [
        Token::named("order", "score"),
        Token::named("order", "id"),
    ];
    let filter = compile(&tokens, &fixed_context()).unwrap();
    assert_eq!(filter.ordering.unwrap().column, OrderColumn::Id);
}

#[test]
fn bad_order_token_aborts_compilation() {
    let tokens = [Token::plain("red"), Token::named("order", "bogus")];
    assert!(compile(&tokens, &fixed_context()).is_err());
}
