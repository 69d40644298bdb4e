use serde_json::{Map, Value};
use tracing::debug;

use crate::core::config::{BlockKitConfig, InitialOptionsPolicy, OptionalFieldPolicy};
use crate::errors::{ValidationError, ensure_max_length};
use crate::slack::block_kit::{
    BlockKitObject, ConfirmObject, OptionObject, OptionalFields, serialize_as_block_kit,
};

pub const ELEMENT_TYPE: &str = "checkboxes";
pub const MAX_ACTION_ID_LENGTH: usize = 255;
pub const MAX_OPTIONS: usize = 10;

/// A group of checkboxes.
///
/// Options are appended in call order and capped at ten. Optional fields
/// (`action_id`, `initial_options`, `confirm`, `focus_on_load`) stay unset
/// until the matching setter runs; how set-but-falsy values are emitted is
/// governed by the element's [`BlockKitConfig`].
///
/// ```
/// use blockkit::slack::{BlockKitObject, CheckboxesElement};
///
/// # fn main() -> Result<(), blockkit::errors::ValidationError> {
/// let mut element = CheckboxesElement::new();
/// element
///     .action_id("opt_1")?
///     .option("Option A", "A1")?
///     .option("Option B", "A2")?
///     .focus_on_load(true);
///
/// assert_eq!(element.to_value()["options"][1]["value"], "A2");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckboxesElement {
    action_id: Option<String>,
    options: Vec<OptionObject>,
    initial_options: Option<Vec<OptionObject>>,
    confirm: Option<ConfirmObject>,
    focus_on_load: Option<bool>,
    config: BlockKitConfig,
}

impl CheckboxesElement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: BlockKitConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Identifier for this action, used to recognise the source of an interaction payload.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::LengthExceeded` when `action_id` is longer than 255 characters.
    pub fn action_id(&mut self, action_id: impl Into<String>) -> Result<&mut Self, ValidationError> {
        let action_id = action_id.into();
        ensure_max_length("action_id", &action_id, MAX_ACTION_ID_LENGTH)?;
        self.action_id = Some(action_id);
        Ok(self)
    }

    /// Append a plain option built from `text` and `value`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::TooManyItems` when ten options already exist,
    /// or `ValidationError::LengthExceeded` when `text` or `value` is too long.
    pub fn option(
        &mut self,
        text: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        ensure_capacity("options", self.options.len())?;
        let option = OptionObject::new(text, value)?;
        self.options.push(option);
        Ok(self)
    }

    /// Append a fully configured option, e.g. one carrying a description.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::TooManyItems` when ten options already exist.
    pub fn add_option(&mut self, option: OptionObject) -> Result<&mut Self, ValidationError> {
        ensure_capacity("options", self.options.len())?;
        self.options.push(option);
        Ok(self)
    }

    /// Pre-select an option when the group first loads.
    ///
    /// Under [`InitialOptionsPolicy::Strict`] the option must already exist in
    /// `options` (matched on text and value) and the stored copy is the full
    /// existing option, so any description or url is carried along.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::LengthExceeded` when `text` or `value` is too
    /// long. Under the strict policy also returns `UnknownInitialOption` or
    /// `TooManyItems`.
    pub fn initial_option(
        &mut self,
        text: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, ValidationError> {
        let option = OptionObject::new(text, value)?;
        self.add_initial_option(option)
    }

    /// Pre-select a fully configured option.
    ///
    /// # Errors
    ///
    /// See [`CheckboxesElement::initial_option`].
    pub fn add_initial_option(
        &mut self,
        option: OptionObject,
    ) -> Result<&mut Self, ValidationError> {
        let option = match self.config.initial_options {
            InitialOptionsPolicy::Relaxed => option,
            InitialOptionsPolicy::Strict => {
                let selected = self.initial_options.as_ref().map_or(0, Vec::len);
                ensure_capacity("initial_options", selected)?;
                self.find_option(&option).cloned().ok_or_else(|| {
                    debug!(value = option.value_str(), "Initial option is not among options");
                    ValidationError::UnknownInitialOption {
                        value: option.value_str().to_string(),
                    }
                })?
            }
        };
        self.initial_options.get_or_insert_with(Vec::new).push(option);
        Ok(self)
    }

    /// Attach a confirmation dialog.
    ///
    /// `configure` runs immediately against a default [`ConfirmObject`]; the
    /// dialog is stored only if it returns `Ok`.
    ///
    /// # Errors
    ///
    /// Propagates whatever error `configure` returns.
    pub fn confirm<F>(&mut self, configure: F) -> Result<&mut Self, ValidationError>
    where
        F: FnOnce(&mut ConfirmObject) -> Result<(), ValidationError>,
    {
        let mut confirm = ConfirmObject::new();
        configure(&mut confirm)?;
        self.confirm = Some(confirm);
        Ok(self)
    }

    /// Auto-focus this element when the containing view opens.
    pub fn focus_on_load(&mut self, focus_on_load: bool) -> &mut Self {
        self.focus_on_load = Some(focus_on_load);
        self
    }

    #[must_use]
    pub fn options(&self) -> &[OptionObject] {
        &self.options
    }

    #[must_use]
    pub fn initial_options(&self) -> Option<&[OptionObject]> {
        self.initial_options.as_deref()
    }

    #[must_use]
    pub fn config(&self) -> BlockKitConfig {
        self.config
    }

    fn find_option(&self, candidate: &OptionObject) -> Option<&OptionObject> {
        self.options
            .iter()
            .find(|o| o.matches(candidate.text_object().text(), candidate.value_str()))
    }
}

fn ensure_capacity(field: &'static str, len: usize) -> Result<(), ValidationError> {
    if len >= MAX_OPTIONS {
        debug!(field, max = MAX_OPTIONS, "Rejecting option over cardinality limit");
        return Err(ValidationError::TooManyItems {
            field,
            max: MAX_OPTIONS,
        });
    }
    Ok(())
}

impl BlockKitObject for CheckboxesElement {
    fn to_value_with(&self, policy: OptionalFieldPolicy) -> Value {
        let mut element = Map::new();
        element.insert("type".to_string(), Value::from(ELEMENT_TYPE));
        if let Some(action_id) = &self.action_id {
            element.insert("action_id".to_string(), Value::from(action_id.as_str()));
        }
        element.insert(
            "options".to_string(),
            Value::Array(self.options.iter().map(|o| o.to_value_with(policy)).collect()),
        );

        let mut optional = OptionalFields::new(policy);
        optional.insert(
            "initial_options",
            self.initial_options
                .as_ref()
                .map(|opts| Value::Array(opts.iter().map(|o| o.to_value_with(policy)).collect())),
        );
        optional.insert(
            "confirm",
            self.confirm.as_ref().map(|c| c.to_value_with(policy)),
        );
        optional.insert("focus_on_load", self.focus_on_load.map(Value::Bool));
        optional.merge_into(&mut element);

        Value::Object(element)
    }

    /// Uses the element's own configured policy.
    fn to_value(&self) -> Value {
        self.to_value_with(self.config.optional_fields)
    }
}

serialize_as_block_kit!(CheckboxesElement);
