//! Property-based checks of the validation and invocation contracts.

use msbuild_task_lib::config::keys;
use msbuild_task_lib::{InvocationDefaults, TaskConfig, build_invocation, validate};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
  "[A-Za-z0-9_]{1,12}"
}

fn property_line() -> impl Strategy<Value = String> {
  (word(), word(), " {0,2}", " {0,2}").prop_map(|(name, value, pad_a, pad_b)| format!("{pad_a}{name}{pad_b}={value}"))
}

fn parameter_line() -> impl Strategy<Value = String> {
  ("[ \t]{0,2}", "[a-z:0-9]{0,10}").prop_map(|(pad, rest)| format!("{pad}/{rest}"))
}

fn any_value() -> impl Strategy<Value = String> {
  prop_oneof![Just(String::new()), Just("true".to_string()), "[ -~\n]{0,20}"]
}

fn any_config() -> impl Strategy<Value = TaskConfig> {
  proptest::collection::vec(any_value(), keys::DECLARED_KEYS.len())
    .prop_map(|values| keys::DECLARED_KEYS.iter().copied().zip(values).collect::<TaskConfig>())
}

proptest! {
  #[test]
  fn blank_solution_file_always_reported(config in any_config(), blank in "[ \t]{0,3}") {
    let config = config.with(keys::SOLUTION_FILE, blank);
    prop_assert!(validate(&config).has_error(keys::SOLUTION_FILE));
  }

  #[test]
  fn custom_path_without_tool_always_reported(config in any_config(), blank in "[ \t]{0,3}") {
    let config = config
      .with(keys::CUSTOMIZE_MSBUILD_PATH, "true")
      .with(keys::MSBUILD_PATH, blank);
    prop_assert!(validate(&config).has_error(keys::MSBUILD_PATH));
  }

  #[test]
  fn well_formed_properties_accepted(lines in proptest::collection::vec(property_line(), 1..6)) {
    let config = TaskConfig::new().with(keys::PROPERTIES, lines.join("\n"));
    prop_assert!(!validate(&config).has_error(keys::PROPERTIES));
  }

  #[test]
  fn one_bad_property_line_gives_one_error(
    lines in proptest::collection::vec(property_line(), 1..6),
    bad in prop_oneof![Just("foo==bar"), Just("noequals"), Just("a=b=c"), Just("=value")],
    at in 0usize..6,
  ) {
    let mut lines = lines;
    let at = at.min(lines.len());
    lines.insert(at, bad.to_string());

    let config = TaskConfig::new().with(keys::PROPERTIES, lines.join("\n"));
    prop_assert_eq!(validate(&config).errors_for(keys::PROPERTIES).count(), 1);
  }

  #[test]
  fn slash_parameters_accepted(lines in proptest::collection::vec(parameter_line(), 1..6)) {
    let config = TaskConfig::new().with(keys::ADDITIONAL_PARAMETERS, lines.join("\r\n"));
    prop_assert!(!validate(&config).has_error(keys::ADDITIONAL_PARAMETERS));
  }

  #[test]
  fn validation_is_idempotent(config in any_config()) {
    prop_assert_eq!(validate(&config), validate(&config));
  }

  #[test]
  fn invocation_is_deterministic(config in any_config(), solution in "[a-z]{1,8}\\.sln") {
    let config = config.with(keys::SOLUTION_FILE, solution.clone());
    let defaults = InvocationDefaults::new("msbuild", ".");

    if validate(&config).is_successful() {
      let first = build_invocation(&config, &defaults).unwrap();
      let second = build_invocation(&config, &defaults).unwrap();
      prop_assert_eq!(first.args.last(), Some(&solution));
      prop_assert_eq!(first, second);
    }
  }
}
