use serde::{Deserialize, Serialize};
use serde_rawjson::{
    from_str, from_value, parse, to_string, to_string_pretty, to_value, Number, Value,
    WriteOptions,
};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: User,
    items: Vec<Product>,
    total: f64,
}

#[test]
fn test_simple_struct() {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    };

    let json = to_string(&user).unwrap();
    assert_eq!(
        json,
        r#"{"id":123,"name":"Alice","active":true,"tags":["admin","developer"]}"#
    );

    let user_back: User = from_str(&json).unwrap();
    assert_eq!(user, user_back);
}

#[test]
fn test_nested_struct() {
    let order = Order {
        order_id: 12345,
        customer: User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["vip".to_string()],
        },
        items: vec![
            Product {
                sku: "WIDGET-001".to_string(),
                price: 29.99,
                quantity: 2,
            },
            Product {
                sku: "GADGET-002".to_string(),
                price: 49.99,
                quantity: 1,
            },
        ],
        total: 109.97,
    };

    let json = to_string_pretty(&order).unwrap();
    println!("Order JSON:\n{}", json);

    let order_back: Order = from_str(&json).unwrap();
    assert_eq!(order, order_back);
}

#[test]
fn test_array_of_objects() {
    let products = vec![
        Product {
            sku: "A001".to_string(),
            price: 10.99,
            quantity: 5,
        },
        Product {
            sku: "B002".to_string(),
            price: 15.99,
            quantity: 3,
        },
    ];

    let json = to_string_pretty(&products).unwrap();
    let products_back: Vec<Product> = from_str(&json).unwrap();
    assert_eq!(products, products_back);
}

#[test]
fn test_options() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Config {
        name: Option<String>,
        retries: Option<u32>,
    }

    let config = Config {
        name: Some("server".to_string()),
        retries: None,
    };

    let json = to_string(&config).unwrap();
    assert_eq!(json, r#"{"name":"server","retries":null}"#);

    let config_back: Config = from_str(&json).unwrap();
    assert_eq!(config, config_back);
}

#[test]
fn test_enums() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    enum Shape {
        Point,
        Circle(f64),
        Rect { w: f64, h: f64 },
    }

    let shapes = vec![
        Shape::Point,
        Shape::Circle(1.5),
        Shape::Rect { w: 2.0, h: 3.0 },
    ];

    let json = to_string(&shapes).unwrap();
    assert_eq!(
        json,
        r#"["Point",{"Circle":1.5},{"Rect":{"w":2.0,"h":3.0}}]"#
    );

    let shapes_back: Vec<Shape> = from_str(&json).unwrap();
    assert_eq!(shapes, shapes_back);
}

#[test]
fn test_hashmap() {
    let mut scores: HashMap<String, i32> = HashMap::new();
    scores.insert("alice".to_string(), 10);
    scores.insert("bob".to_string(), 20);

    let json = to_string(&scores).unwrap();
    let scores_back: HashMap<String, i32> = from_str(&json).unwrap();
    assert_eq!(scores, scores_back);
}

#[test]
fn test_special_strings() {
    let strings = vec![
        "".to_string(),
        "with \"quotes\"".to_string(),
        "back\\slash".to_string(),
        "line\nbreak\ttab".to_string(),
        "unicode: café ☃".to_string(),
        "emoji: 😀".to_string(),
    ];

    let json = to_string(&strings).unwrap();
    let strings_back: Vec<String> = from_str(&json).unwrap();
    assert_eq!(strings, strings_back);
}

#[test]
fn test_ascii_only_output_round_trips() {
    let text = "café ☃ 😀".to_string();
    let options = WriteOptions::new().with_escape_non_ascii(true);
    let json = serde_rawjson::to_string_with_options(&text, &options).unwrap();
    assert!(json.is_ascii());
    let back: String = from_str(&json).unwrap();
    assert_eq!(text, back);
}

#[test]
fn test_numbers() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Numbers {
        small: i8,
        medium: i32,
        large: i64,
        unsigned: u64,
        float: f64,
        negative: f64,
    }

    let numbers = Numbers {
        small: -5,
        medium: 100_000,
        large: i64::MAX,
        unsigned: 9_007_199_254_740_993,
        float: 3.141592653589793,
        negative: -2.5e-3,
    };

    let json = to_string(&numbers).unwrap();
    assert!(json.contains("9007199254740993"));
    assert!(json.contains(&i64::MAX.to_string()));

    let numbers_back: Numbers = from_str(&json).unwrap();
    assert_eq!(numbers, numbers_back);
}

#[test]
fn test_to_value_and_from_value() {
    let user = User {
        id: 7,
        name: "Bob".to_string(),
        active: false,
        tags: vec![],
    };

    let value = to_value(&user).unwrap();
    assert_eq!(
        value.get("id"),
        Some(&Value::Number(Number::Integer(7)))
    );
    assert_eq!(value.get("tags"), Some(&Value::Array(vec![])));

    let user_back: User = from_value(value).unwrap();
    assert_eq!(user, user_back);
}

#[test]
fn test_parse_accepts_whitespace_everywhere() {
    let doc = parse(" \t\r\n { \"a\" : [ 1 , 2 ] , \"b\" : { } } \n").unwrap();
    let a = doc.get("a").and_then(|v| v.as_array()).unwrap();
    assert_eq!(a.len(), 2);
    assert!(doc.get("b").map(|v| v.is_object()).unwrap_or(false));
}

#[test]
fn test_typed_struct_from_raw_heavy_document() {
    // Numbers within machine range deserialize into typed fields even when
    // the document came from another producer with odd formatting
    let json = r#"{"sku": "X", "price": 1.0e1, "quantity": 2}"#;
    let product: Product = from_str(json).unwrap();
    assert_eq!(
        product,
        Product {
            sku: "X".to_string(),
            price: 10.0,
            quantity: 2,
        }
    );
}

#[test]
fn test_unit_and_tuple() {
    let json = to_string(&()).unwrap();
    assert_eq!(json, "null");

    let pair = (1, "two".to_string());
    let json = to_string(&pair).unwrap();
    assert_eq!(json, r#"[1,"two"]"#);
    let pair_back: (i32, String) = from_str(&json).unwrap();
    assert_eq!(pair, pair_back);
}
