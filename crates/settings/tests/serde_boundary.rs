use serde_json::json;
use settings::{Kind, Tree, Value};

#[test]
fn test_yaml_scalar_kinds() {
    let tree: Tree = serde_yaml::from_str(
        "int: 7\nneg: -3\nfloat: 0.25\nyes: true\nnothing: ~\ntext: '42'\n",
    )
    .unwrap();
    assert_eq!(tree.raw("int").map(|v| v.kind()), Ok(Kind::Int));
    assert_eq!(tree.int("neg"), Ok(-3));
    assert_eq!(tree.raw("float").map(|v| v.kind()), Ok(Kind::Float));
    assert_eq!(tree.bool("yes"), Ok(true));
    assert_eq!(tree.raw("nothing"), Ok(Value::Null));
    assert_eq!(tree.string("text"), Ok("42".to_string()));
}

#[test]
fn test_yaml_non_string_keys_are_stringified() {
    let tree: Tree = serde_yaml::from_str(
        "ports:\n  80: http\n  443: https\nflags:\n  true: on\n  ~: unset\n  1.5: half\n",
    )
    .unwrap();
    assert_eq!(tree.string("ports.80"), Ok("http".to_string()));
    assert_eq!(tree.tree("ports").unwrap().keys(), vec!["80", "443"]);
    assert_eq!(
        tree.tree("flags").unwrap().keys(),
        vec!["true", "null", "1.5"]
    );
}

#[test]
fn test_root_must_be_mapping() {
    assert!(serde_yaml::from_str::<Tree>("- one\n- two\n").is_err());
    assert!(serde_json::from_value::<Tree>(json!("scalar")).is_err());
    assert!(serde_json::from_value::<Value>(json!("scalar")).is_ok());
}

#[test]
fn test_json_output_after_mutation() {
    let mut tree = Tree::from_json(json!({"name": "svc", "tags": ["a"]})).unwrap();
    tree.append("tags", "b").unwrap();
    tree.set("limits.cpu", 2).unwrap();
    tree.delete("name").unwrap();

    assert_eq!(
        tree.to_json(),
        json!({"tags": ["a", "b"], "limits": {"cpu": 2}})
    );
    assert_eq!(
        serde_json::to_string(&tree).unwrap(),
        r#"{"tags":["a","b"],"limits":{"cpu":2}}"#
    );
}

#[test]
fn test_yaml_roundtrip() {
    let source = "a: 1\nb:\n- x\n- y\nc:\n  d: true\n";
    let tree: Tree = serde_yaml::from_str(source).unwrap();
    let text = serde_yaml::to_string(&tree).unwrap();
    let back: Tree = serde_yaml::from_str(&text).unwrap();
    assert_eq!(back, tree);
}

#[test]
fn test_sub_tree_serializes_its_mapping() {
    let tree = Tree::from_json(json!({"db": {"host": "localhost", "port": 5432}})).unwrap();
    let db = tree.tree("db").unwrap();
    assert_eq!(db.to_json(), json!({"host": "localhost", "port": 5432}));
}
