use minitrees::prelude::*;

use std::collections::HashMap;

// Toy table with one categorical attribute:
//
//   Weather | class
//  ---------+-------
//   Sunny   | Yes
//   Sunny   | Yes
//   Rainy   | No
//   Rainy   | No
//
// `Weather` separates the classes perfectly, so the induced tree is a
// single branch with two pure leaves.

fn example(pairs: &[(&str, &str)], label: &str) -> Example {
    let attributes = pairs.iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect::<HashMap<_, _>>();
    Example::new(attributes, label)
}

fn weather_sample() -> Sample {
    let examples = vec![
        example(&[("Weather", "Sunny")], "Yes"),
        example(&[("Weather", "Sunny")], "Yes"),
        example(&[("Weather", "Rainy")], "No"),
        example(&[("Weather", "Rainy")], "No"),
    ];
    Sample::from_examples(examples).unwrap()
}

fn play_tennis() -> Sample {
    let mut path = std::env::current_dir().unwrap();
    path.push("tests/dataset/weather.csv");

    SampleReader::default()
        .file(path)
        .has_header(true)
        .target_feature("PlayTennis")
        .read()
        .unwrap()
}


#[test]
fn perfect_single_attribute_split() {
    let sample = weather_sample();
    let tree = DecisionTree::fit(&sample).unwrap();

    match tree.root() {
        Node::Branch { attribute, children, .. } => {
            assert_eq!(attribute, "Weather");
            assert_eq!(children.len(), 2);
            assert!(children.values().all(Node::is_leaf));
        },
        Node::Leaf { .. } => panic!("expected a branch at the root"),
    }

    assert_eq!(tree.predict(&Query::new().set("Weather", "Sunny")), "Yes");
    assert_eq!(tree.predict(&Query::new().set("Weather", "Rainy")), "No");
}


#[test]
fn unseen_value_falls_back_to_the_root_majority() {
    // "Yes" and "No" are tied at the root;
    // the lexicographically smallest label wins.
    let sample = weather_sample();
    let tree = DecisionTree::fit(&sample).unwrap();

    assert_eq!(tree.predict(&Query::new().set("Weather", "Cloudy")), "No");

    // A query that omits the split attribute takes the same fallback.
    assert_eq!(tree.predict(&Query::new()), "No");
}


#[test]
fn extra_query_attributes_are_ignored() {
    let sample = weather_sample();
    let tree = DecisionTree::fit(&sample).unwrap();

    let query = Query::new()
        .set("Weather", "Sunny")
        .set("Mood", "Gloomy");
    assert_eq!(tree.predict(&query), "Yes");
}


#[test]
fn uniform_class_collapses_to_a_single_leaf() {
    let examples = vec![
        example(&[("Weather", "Sunny"),  ("Wind", "Weak")],   "Yes"),
        example(&[("Weather", "Rainy"),  ("Wind", "Weak")],   "Yes"),
        example(&[("Weather", "Sunny"),  ("Wind", "Strong")], "Yes"),
        example(&[("Weather", "Cloudy"), ("Wind", "Weak")],   "Yes"),
    ];
    let sample = Sample::from_examples(examples).unwrap();
    let tree = DecisionTree::fit(&sample).unwrap();

    assert!(tree.root().is_leaf());
    assert_eq!(tree.depth(), 0);
    assert_eq!(tree.leaves(), 1);
    assert_eq!(tree.predict(&Query::new().set("Weather", "Snowy")), "Yes");
}


#[test]
fn fitting_an_empty_sample_is_an_error() {
    let sample = Sample::from_examples(Vec::new()).unwrap();
    let result = DecisionTree::fit(&sample);
    assert!(matches!(result, Err(TreeError::EmptyTrainingSet)));
}


#[test]
fn three_values_make_a_depth_one_tree_with_three_leaves() {
    let examples = vec![
        example(&[("Weather", "Sunny")],  "Beach"),
        example(&[("Weather", "Rainy")],  "Museum"),
        example(&[("Weather", "Cloudy")], "Hike"),
    ];
    let sample = Sample::from_examples(examples).unwrap();
    let tree = DecisionTree::fit(&sample).unwrap();

    assert_eq!(tree.depth(), 1);
    assert_eq!(tree.leaves(), 3);
    assert_eq!(tree.predict(&Query::new().set("Weather", "Sunny")), "Beach");
    assert_eq!(tree.predict(&Query::new().set("Weather", "Rainy")), "Museum");
    assert_eq!(tree.predict(&Query::new().set("Weather", "Cloudy")), "Hike");
}


#[test]
fn classification_is_idempotent() {
    let sample = weather_sample();
    let tree = DecisionTree::fit(&sample).unwrap();

    let query = Query::new().set("Weather", "Sunny");
    assert_eq!(tree.predict(&query), tree.predict(&query));
}


#[test]
fn training_the_same_sample_twice_yields_the_same_tree() {
    let sample = play_tennis();
    let first = DecisionTree::fit(&sample).unwrap();
    let second = DecisionTree::fit(&sample).unwrap();

    assert_eq!(first, second);

    for outlook in ["Sunny", "Overcast", "Rain", "Foggy"] {
        for humidity in ["High", "Normal", "Soggy"] {
            for wind in ["Weak", "Strong"] {
                let query = Query::new()
                    .set("Outlook", outlook)
                    .set("Humidity", humidity)
                    .set("Wind", wind);
                assert_eq!(first.predict(&query), second.predict(&query));
            }
        }
    }
}


#[test]
fn play_tennis_is_learned_perfectly() {
    let sample = play_tennis();
    let tree = DecisionTree::fit(&sample).unwrap();

    // The canonical result: `Outlook` maximizes the information gain
    // at the root.
    match tree.root() {
        Node::Branch { attribute, .. } => assert_eq!(attribute, "Outlook"),
        Node::Leaf { .. } => panic!("expected a branch at the root"),
    }

    // The table is consistent, so the tree classifies it perfectly.
    assert_eq!(zero_one_error(&sample, &tree), 0.0);

    let sunny_high = Query::new()
        .set("Outlook", "Sunny")
        .set("Humidity", "High");
    assert_eq!(tree.predict(&sunny_high), "No");

    let sunny_normal = Query::new()
        .set("Outlook", "Sunny")
        .set("Humidity", "Normal");
    assert_eq!(tree.predict(&sunny_normal), "Yes");

    let overcast = Query::new().set("Outlook", "Overcast");
    assert_eq!(tree.predict(&overcast), "Yes");

    let rain_weak = Query::new()
        .set("Outlook", "Rain")
        .set("Wind", "Weak");
    assert_eq!(tree.predict(&rain_weak), "Yes");

    let rain_strong = Query::new()
        .set("Outlook", "Rain")
        .set("Wind", "Strong");
    assert_eq!(tree.predict(&rain_strong), "No");
}


#[test]
fn no_attribute_repeats_along_a_path() {
    fn check(node: &Node, seen: &mut Vec<String>) {
        if let Node::Branch { attribute, children, .. } = node {
            assert!(
                !seen.contains(attribute),
                "attribute `{attribute}` repeats along a path"
            );
            seen.push(attribute.clone());
            for child in children.values() {
                check(child, seen);
            }
            seen.pop();
        }
    }

    let sample = play_tennis();
    let tree = DecisionTree::fit(&sample).unwrap();
    check(tree.root(), &mut Vec::new());

    // The recursion consumes one attribute per level.
    assert!(tree.depth() <= sample.shape().1);
}


#[test]
fn predict_all_matches_predict() {
    let sample = weather_sample();
    let tree = DecisionTree::fit(&sample).unwrap();

    let queries = vec![
        Query::new().set("Weather", "Sunny"),
        Query::new().set("Weather", "Rainy"),
        Query::new().set("Weather", "Cloudy"),
    ];
    let predictions = tree.predict_all(&queries);
    assert_eq!(predictions, vec!["Yes", "No", "No"]);
}


#[test]
fn json_round_trip_preserves_the_tree() {
    let sample = play_tennis();
    let tree = DecisionTree::fit(&sample).unwrap();

    let mut path = std::env::temp_dir();
    path.push("minitrees_test_tree.json");

    tree.to_json_file(&path).unwrap();
    let restored = DecisionTree::from_json_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(tree, restored);
}
