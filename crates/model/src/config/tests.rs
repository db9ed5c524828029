use std::fs;

use super::*;

#[test]
fn test_parse_full_settings() {
	let config = ProjectConfig::parse(
		r#"
root "/home/me/Blink"
main-config BlinkAppC
include "/opt/tos/system" "/opt/tos/interfaces"
define DEBUG "LEVEL=2"
default-include "/opt/tos/hardware.h"
"#,
	)
	.unwrap();

	assert_eq!(config.root, PathBuf::from("/home/me/Blink"));
	assert_eq!(config.main_config.as_deref(), Some("BlinkAppC"));
	assert_eq!(config.include_paths, [PathBuf::from("/opt/tos/system"), PathBuf::from("/opt/tos/interfaces")]);
	assert_eq!(config.macros, ["DEBUG", "LEVEL=2"]);
	assert_eq!(config.default_includes, [PathBuf::from("/opt/tos/hardware.h")]);
	assert!(config.warnings.is_empty());
}

#[test]
fn test_parse_requires_root() {
	let err = ProjectConfig::parse("main-config App\n").unwrap_err();
	assert!(matches!(err, ConfigError::MissingField("root")));
}

#[test]
fn test_parse_collects_warnings() {
	let config = ProjectConfig::parse("root \"/p\"\nplatform telosb\ninclude\n").unwrap();
	assert_eq!(
		config.warnings,
		[ConfigWarning::UnknownNode("platform".into()), ConfigWarning::Empty("include".into())]
	);
}

#[test]
fn test_parse_rejects_bad_kdl() {
	assert!(matches!(ProjectConfig::parse("root \"unterminated\n"), Err(ConfigError::Kdl(_))));
}

#[test]
fn test_load_missing_file_is_io_error() {
	let dir = tempfile::tempdir().unwrap();
	let err = ProjectConfig::load(dir.path().join("absent.kdl")).unwrap_err();
	assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_options_are_ordered_by_kind() {
	let dir = tempfile::tempdir().unwrap();
	fs::write(dir.path().join("hardware.h"), "").unwrap();
	fs::create_dir(dir.path().join("system")).unwrap();

	let config = ProjectConfig::new(dir.path())
		.with_main_config("BlinkAppC")
		.with_default_include("hardware.h")
		.with_macro("DEBUG")
		.with_include_path("system");

	let options = config.options().unwrap();
	assert_eq!(
		options,
		[
			ContextOption::IncludePath(dir.path().join("system")),
			ContextOption::Define("DEBUG".into()),
			ContextOption::DefaultInclude(dir.path().join("hardware.h")),
			ContextOption::MainConfig("BlinkAppC".into()),
			ContextOption::ProjectRoot(dir.path().to_path_buf()),
		]
	);

	let args = to_args(&options);
	assert_eq!(args[0], "-I");
	assert_eq!(args[2], "-D");
	assert_eq!(args[3], "DEBUG");
	assert_eq!(args[4], "-include");
	assert_eq!(args[6..8], ["-m".to_string(), "BlinkAppC".to_string()]);
	assert_eq!(args[8], "-p");
}

#[test]
fn test_options_tolerate_missing_include_dir() {
	let dir = tempfile::tempdir().unwrap();
	let config = ProjectConfig::new(dir.path()).with_include_path("nowhere");
	assert_eq!(config.options().unwrap().len(), 2);
}

#[test]
fn test_options_reject_missing_default_include() {
	let dir = tempfile::tempdir().unwrap();
	let config = ProjectConfig::new(dir.path()).with_default_include("absent.h");
	let err = config.options().unwrap_err();
	assert!(matches!(err, ConfigError::MissingFile(path) if path == dir.path().join("absent.h")));
}

#[test]
fn test_options_reject_invalid_macro() {
	let config = ProjectConfig::new("/p").with_macro("1BAD=3");
	assert!(matches!(config.options(), Err(ConfigError::InvalidMacro(m)) if m == "1BAD=3"));

	let config = ProjectConfig::new("/p").with_macro("=3");
	assert!(matches!(config.options(), Err(ConfigError::InvalidMacro(_))));
}

#[test]
fn test_options_reject_relative_root() {
	let config = ProjectConfig::new("relative/root");
	assert!(matches!(config.options(), Err(ConfigError::RelativeRoot(_))));
}

#[test]
fn test_empty_main_config_is_omitted() {
	let config = ProjectConfig::new("/p").with_main_config("");
	assert_eq!(config.options().unwrap(), [ContextOption::ProjectRoot("/p".into())]);
}
