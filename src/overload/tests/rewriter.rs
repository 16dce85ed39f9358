use pretty_assertions::assert_eq;
use std::collections::HashSet;

use crate::overload::rewriter::rewrite_call_sites;

fn names(list: &[&str]) -> HashSet<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn test_nested_calls_are_rewritten() {
    let source = "vec3 c = normalize(cross(a,b));";
    let expected = "vec3 c = overloaded_normalize(overloaded_cross(a,b));";
    assert_eq!(
        rewrite_call_sites(source, &names(&["normalize", "cross"])),
        expected
    );
}

#[test]
fn test_builtin_name_without_call_is_unchanged() {
    let source = "float length = 3.0;";
    assert_eq!(rewrite_call_sites(source, &names(&["length"])), source);
}

#[test]
fn test_whitespace_before_parenthesis_defeats_the_match() {
    let source = "float x = length (v);";
    assert_eq!(rewrite_call_sites(source, &names(&["length"])), source);
}

#[test]
fn test_non_member_calls_are_unchanged() {
    let source = "vec3 c = my_cross(a, b) + usin(x);";
    assert_eq!(rewrite_call_sites(source, &names(&["cross", "sin"])), source);
}

#[test]
fn test_empty_name_set_leaves_source_unchanged() {
    let source = "vec3 c = normalize(cross(a,b));";
    assert_eq!(rewrite_call_sites(source, &HashSet::new()), source);
}

#[test]
fn test_rewriting_is_idempotent() {
    let set = names(&["sin", "cos"]);
    let once = rewrite_call_sites("float y = sin(x) + cos(x);", &set);
    assert_eq!(rewrite_call_sites(&once, &set), once);
}

#[test]
fn test_matches_inside_comments_are_rewritten() {
    // Lexical matching does not skip comments. Accepted limitation.
    let source = "// sin(x) wraps the builtin";
    let expected = "// overloaded_sin(x) wraps the builtin";
    assert_eq!(rewrite_call_sites(source, &names(&["sin"])), expected);
}

#[test]
fn test_multiline_shader_rewrites_every_call_site() {
    let source = r#"
float sdf(vec2 p) {
    float d = length(p) - RADIUS;
    return mix(d, abs(d), smoothness);
}

void main() {
    float v = sdf(uv);
    color = vec4(vec3(pow(v, 2.2)), 1.0);
}
"#;
    let expected = r#"
float sdf(vec2 p) {
    float d = overloaded_length(p) - RADIUS;
    return overloaded_mix(d, overloaded_abs(d), smoothness);
}

void main() {
    float v = sdf(uv);
    color = vec4(vec3(overloaded_pow(v, 2.2)), 1.0);
}
"#;
    let set = names(&["length", "mix", "abs", "pow"]);
    assert_eq!(rewrite_call_sites(source, &set), expected);
}
