use blockkit::core::config::{BlockKitConfig, InitialOptionsPolicy, OptionalFieldPolicy};
use blockkit::errors::ValidationError;
use blockkit::slack::{BlockKitObject, CheckboxesElement, ConfirmStyle, OptionObject};
use serde_json::json;

fn sample_element(config: BlockKitConfig) -> CheckboxesElement {
    let mut element = CheckboxesElement::with_config(config);
    element
        .action_id("opt_1")
        .unwrap()
        .option("Option A", "A1")
        .unwrap()
        .option("Option B", "A2")
        .unwrap();
    element
}

#[test]
fn builds_expected_payload() {
    let mut element = sample_element(BlockKitConfig::default());
    element.focus_on_load(true);

    let expected = r#"{"type":"checkboxes","action_id":"opt_1","options":[{"value":"A1","text":{"type":"plain_text","text":"Option A"}},{"value":"A2","text":{"type":"plain_text","text":"Option B"}}],"focus_on_load":true}"#;
    assert_eq!(serde_json::to_string(&element).unwrap(), expected);
}

#[test]
fn explicit_false_focus_is_kept_by_default() {
    let mut element = sample_element(BlockKitConfig::default());
    element.focus_on_load(false);

    assert_eq!(element.to_value()["focus_on_load"], json!(false));
}

#[test]
fn explicit_false_focus_is_dropped_under_drop_falsy() {
    let config = BlockKitConfig {
        optional_fields: OptionalFieldPolicy::DropFalsy,
        ..BlockKitConfig::default()
    };
    let mut element = sample_element(config);
    element.focus_on_load(false);

    let value = element.to_value();
    assert!(value.get("focus_on_load").is_none());
    assert_eq!(value["options"].as_array().unwrap().len(), 2);
}

#[test]
fn configured_policy_applies_to_options() {
    let config = BlockKitConfig {
        optional_fields: OptionalFieldPolicy::DropFalsy,
        ..BlockKitConfig::default()
    };
    let mut option = OptionObject::new("a", "b").unwrap();
    option.url("").unwrap();

    let mut element = CheckboxesElement::with_config(config);
    element.add_option(option).unwrap();

    let value = element.to_value();
    assert!(value["options"][0].get("url").is_none());
    assert_eq!(value["options"][0]["value"], "b");

    let encoded = serde_json::to_string(&element).unwrap();
    assert_eq!(
        encoded,
        r#"{"type":"checkboxes","options":[{"value":"b","text":{"type":"plain_text","text":"a"}}]}"#
    );

    // The default element keeps the explicitly set empty url
    let mut option = OptionObject::new("a", "b").unwrap();
    option.url("").unwrap();
    let mut element = CheckboxesElement::new();
    element.add_option(option).unwrap();
    assert_eq!(element.to_value()["options"][0]["url"], "");
}

#[test]
fn to_value_with_overrides_configured_policy() {
    let mut element = sample_element(BlockKitConfig::default());
    element.focus_on_load(false);

    let dropped = element.to_value_with(OptionalFieldPolicy::DropFalsy);
    assert!(dropped.get("focus_on_load").is_none());
}

#[test]
fn unset_optionals_are_omitted() {
    let mut element = CheckboxesElement::new();
    element.option("Only", "only").unwrap();

    assert_eq!(
        element.to_value(),
        json!({
            "type": "checkboxes",
            "options": [
                { "value": "only", "text": { "type": "plain_text", "text": "Only" } }
            ]
        })
    );
}

#[test]
fn empty_element_has_empty_options() {
    let element = CheckboxesElement::new();
    assert_eq!(element.to_value(), json!({ "type": "checkboxes", "options": [] }));
}

#[test]
fn eleventh_option_is_rejected() {
    let mut element = CheckboxesElement::new();
    for i in 0..10 {
        element.option(format!("Option {i}"), format!("v{i}")).unwrap();
    }

    let err = element.option("Option 10", "v10").unwrap_err();
    assert_eq!(
        err,
        ValidationError::TooManyItems {
            field: "options",
            max: 10
        }
    );
    assert_eq!(element.options().len(), 10);
    assert_eq!(element.options()[9].value_str(), "v9");

    let prebuilt = OptionObject::new("Extra", "extra").unwrap();
    assert!(element.add_option(prebuilt).is_err());
    assert_eq!(element.options().len(), 10);
}

#[test]
fn invalid_option_is_not_appended() {
    let mut element = CheckboxesElement::new();
    assert!(element.option("t".repeat(76), "v").is_err());
    assert!(element.option("t", "v".repeat(76)).is_err());
    assert!(element.options().is_empty());
}

#[test]
fn action_id_limit() {
    let mut element = CheckboxesElement::new();
    assert!(element.action_id("a".repeat(255)).is_ok());

    let err = element.action_id("a".repeat(256)).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::LengthExceeded {
            field: "action_id",
            max: 255,
            actual: 256
        }
    ));
    assert_eq!(element.to_value()["action_id"], "a".repeat(255));
}

#[test]
fn strict_initial_option_must_match_an_option() {
    let mut element = sample_element(BlockKitConfig::default());
    element.initial_option("Option B", "A2").unwrap();

    let err = element.initial_option("Option C", "A3").unwrap_err();
    assert_eq!(
        err,
        ValidationError::UnknownInitialOption {
            value: "A3".to_string()
        }
    );

    // Same value but different text is not a match either
    assert!(element.initial_option("Option X", "A1").is_err());

    assert_eq!(
        element.to_value()["initial_options"],
        json!([{ "value": "A2", "text": { "type": "plain_text", "text": "Option B" } }])
    );
}

#[test]
fn strict_initial_option_copies_the_full_option() {
    let mut described = OptionObject::new("Canvas", "canvas").unwrap();
    described.description("Recommended").unwrap();

    let mut element = CheckboxesElement::new();
    element.add_option(described).unwrap();
    element.initial_option("Canvas", "canvas").unwrap();

    let value = element.to_value();
    assert_eq!(value["initial_options"][0], value["options"][0]);
    assert_eq!(
        value["initial_options"][0]["description"]["text"],
        "Recommended"
    );
}

#[test]
fn strict_initial_options_are_capped() {
    let mut element = CheckboxesElement::new();
    for i in 0..10 {
        element.option(format!("Option {i}"), format!("v{i}")).unwrap();
    }
    for i in 0..10 {
        element
            .initial_option(format!("Option {i}"), format!("v{i}"))
            .unwrap();
    }

    let err = element.initial_option("Option 0", "v0").unwrap_err();
    assert_eq!(
        err,
        ValidationError::TooManyItems {
            field: "initial_options",
            max: 10
        }
    );
    assert_eq!(element.initial_options().map(<[_]>::len), Some(10));
}

#[test]
fn relaxed_initial_options_are_not_checked() {
    let config = BlockKitConfig {
        initial_options: InitialOptionsPolicy::Relaxed,
        ..BlockKitConfig::default()
    };
    let mut element = CheckboxesElement::with_config(config);
    for i in 0..11 {
        element
            .initial_option(format!("Ghost {i}"), format!("g{i}"))
            .unwrap();
    }

    assert!(element.options().is_empty());
    assert_eq!(element.initial_options().map(<[_]>::len), Some(11));
    assert_eq!(element.to_value()["initial_options"][10]["value"], "g10");
}

#[test]
fn relaxed_initial_option_still_validates_lengths() {
    let config = BlockKitConfig {
        initial_options: InitialOptionsPolicy::Relaxed,
        ..BlockKitConfig::default()
    };
    let mut element = CheckboxesElement::with_config(config);
    assert!(element.initial_option("t", "v".repeat(76)).is_err());
    assert!(element.initial_options().is_none());
}

#[test]
fn confirm_runs_configurator() {
    let mut element = sample_element(BlockKitConfig::default());
    element
        .confirm(|confirm| {
            confirm.title("Apply?")?;
            confirm.style(ConfirmStyle::Primary);
            Ok(())
        })
        .unwrap();

    let confirm = &element.to_value()["confirm"];
    assert_eq!(confirm["title"]["text"], "Apply?");
    assert_eq!(confirm["deny"]["text"], "No");
    assert_eq!(confirm["style"], "primary");
}

#[test]
fn failed_configurator_leaves_confirm_unset() {
    let mut element = sample_element(BlockKitConfig::default());
    let err = element
        .confirm(|confirm| {
            confirm.deny("d".repeat(31))?;
            Ok(())
        })
        .unwrap_err();

    assert!(matches!(err, ValidationError::LengthExceeded { max: 30, .. }));
    assert!(element.to_value().get("confirm").is_none());
}

#[test]
fn full_element_key_order() {
    let mut element = sample_element(BlockKitConfig::default());
    element
        .initial_option("Option A", "A1")
        .unwrap()
        .confirm(|_| Ok(()))
        .unwrap()
        .focus_on_load(true);

    let value = element.to_value();
    let keys: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        keys,
        vec![
            "type",
            "action_id",
            "options",
            "initial_options",
            "confirm",
            "focus_on_load"
        ]
    );
}

#[test]
fn serialization_is_repeatable() {
    let mut element = sample_element(BlockKitConfig::default());
    element.focus_on_load(true);

    let first = element.to_value();
    let second = element.to_value();
    assert_eq!(first, second);
    assert_eq!(element.options().len(), 2);
}

#[test]
fn element_embeds_in_larger_payload() {
    let mut element = CheckboxesElement::new();
    element
        .action_id("share_flags")
        .unwrap()
        .option("Include number of messages summarized", "include_count")
        .unwrap();

    let block = json!({
        "type": "section",
        "block_id": "share_opts",
        "text": { "type": "mrkdwn", "text": "Options" },
        "accessory": element
    });

    assert_eq!(block["accessory"]["type"], "checkboxes");
    assert_eq!(block["accessory"]["options"][0]["value"], "include_count");
}
