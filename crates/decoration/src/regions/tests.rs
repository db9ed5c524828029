use nesc_primitives::{DirectiveKind, Span};

use super::*;

fn directive(kind: DirectiveKind, line: LineIdx, active: bool) -> Directive {
	let keyword = kind.keyword().len();
	Directive::new(kind, Span::new(line, 0, 1), Span::new(line, 1, keyword), line..=line, active)
}

fn ifdef(line: LineIdx, active: bool) -> Directive {
	directive(DirectiveKind::Ifdef { name: Span::new(line, 7, 3) }, line, active)
}

#[test]
fn test_no_directives_means_no_regions() {
	let regions = ConditionalRegions::new(&[]);
	assert!(regions.ranges().is_empty());
	assert!(!regions.is_inactive(0));
}

#[test]
fn test_unterminated_inactive_group_runs_to_end() {
	let regions = ConditionalRegions::new(&[ifdef(3, false)]);
	assert!(!regions.is_inactive(3));
	assert!(regions.is_inactive(4));
	assert!(regions.is_inactive(5));
	assert!(regions.is_inactive(10_000));
}

#[test]
fn test_else_branch_flips_region() {
	let regions = ConditionalRegions::new(&[
		ifdef(0, false),
		directive(DirectiveKind::Else, 3, true),
		directive(DirectiveKind::Endif, 6, true),
	]);
	assert_eq!(regions.ranges(), [1..3]);
	assert!(regions.is_inactive(2));
	assert!(!regions.is_inactive(4));
	assert!(!regions.is_inactive(7));
}

#[test]
fn test_nested_group_inside_inactive_branch_stays_inactive() {
	// 0 #ifdef A (not taken)
	// 1   code
	// 2   #ifdef B (taken)
	// 3     code
	// 4   #endif
	// 5   code      <- still inside A
	// 6 #endif
	// 7 code
	let regions = ConditionalRegions::new(&[
		ifdef(0, false),
		ifdef(2, true),
		directive(DirectiveKind::Endif, 4, true),
		directive(DirectiveKind::Endif, 6, true),
	]);
	for line in [1, 3, 5] {
		assert!(regions.is_inactive(line), "line {line} should be inactive");
	}
	for line in [0, 2, 4, 6, 7] {
		assert!(!regions.is_inactive(line), "line {line} should be active");
	}
}

#[test]
fn test_inactive_nested_inside_active() {
	// 0 #ifdef A (taken)
	// 1 #ifndef B (not taken)
	// 2   code
	// 3 #elif (taken)
	// 4   code
	// 5 #endif
	// 6 code
	// 7 #endif
	let regions = ConditionalRegions::new(&[
		ifdef(0, true),
		directive(DirectiveKind::Ifndef { name: Span::new(1, 8, 1) }, 1, false),
		directive(DirectiveKind::Elif, 3, true),
		directive(DirectiveKind::Endif, 5, true),
		directive(DirectiveKind::Endif, 7, true),
	]);
	assert_eq!(regions.ranges(), [2..3]);
}

#[test]
fn test_define_inside_inactive_group_does_not_end_region() {
	let regions = ConditionalRegions::new(&[
		ifdef(0, false),
		directive(DirectiveKind::Define { name: Span::new(2, 8, 1) }, 2, false),
		directive(DirectiveKind::Endif, 5, true),
	]);
	assert_eq!(regions.ranges(), [1..2, 3..5]);
}

#[test]
fn test_multi_line_directive_excluded_from_region() {
	let define = Directive::new(
		DirectiveKind::Define { name: Span::new(1, 8, 3) },
		Span::new(1, 0, 1),
		Span::new(1, 1, 6),
		1..=3,
		true,
	);
	let regions = ConditionalRegions::new(&[ifdef(0, false), define, directive(DirectiveKind::Endif, 6, true)]);
	assert_eq!(regions.ranges(), [4..6]);
}

#[test]
fn test_stray_branch_and_close_are_ignored() {
	let regions = ConditionalRegions::new(&[directive(DirectiveKind::Else, 0, false), directive(DirectiveKind::Endif, 2, true)]);
	assert!(regions.ranges().is_empty());
}
