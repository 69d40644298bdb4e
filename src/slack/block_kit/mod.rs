//! Typed Block Kit builders.
//!
//! Composites (text, option, confirm) are the reusable values embedded in
//! elements. Every object validates its fields when they are set and turns
//! into the exact JSON shape Slack expects through [`BlockKitObject`].

use serde_json::{Map, Value};

use crate::core::config::OptionalFieldPolicy;

pub mod composites;
pub mod elements;

pub use composites::{
    ConfirmObject, ConfirmStyle, OptionObject, PlainTextOnlyTextObject, TextObject, TextType,
};
pub use elements::CheckboxesElement;

/// Conversion of a Block Kit object into its wire representation.
pub trait BlockKitObject {
    /// Build the JSON object, emitting optional fields according to `policy`.
    fn to_value_with(&self, policy: OptionalFieldPolicy) -> Value;

    /// Build the JSON object with the default optional field policy.
    fn to_value(&self) -> Value {
        self.to_value_with(OptionalFieldPolicy::default())
    }
}

/// Optional keys collected after the required ones and filtered by policy.
pub(crate) struct OptionalFields {
    policy: OptionalFieldPolicy,
    fields: Map<String, Value>,
}

impl OptionalFields {
    pub(crate) fn new(policy: OptionalFieldPolicy) -> Self {
        Self {
            policy,
            fields: Map::new(),
        }
    }

    pub(crate) fn insert(&mut self, key: &str, value: Option<Value>) {
        let Some(value) = value else {
            return;
        };
        if self.policy == OptionalFieldPolicy::DropFalsy && is_falsy(&value) {
            return;
        }
        self.fields.insert(key.to_string(), value);
    }

    /// Append the collected fields after the required ones.
    pub(crate) fn merge_into(self, required: &mut Map<String, Value>) {
        required.extend(self.fields);
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// Implement `serde::Serialize` by way of [`BlockKitObject::to_value`].
macro_rules! serialize_as_block_kit {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl serde::Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    let value = $crate::slack::block_kit::BlockKitObject::to_value(self);
                    serde::Serialize::serialize(&value, serializer)
                }
            }
        )+
    };
}

pub(crate) use serialize_as_block_kit;
