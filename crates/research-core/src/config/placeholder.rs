//! Placeholder - 環境変数参照の検出と解決
//!
//! 文字列全体が次のどちらかに一致したときだけ placeholder とみなします
//! （部分文字列の補間はしない）:
//! - wrapped form: `${NAME}`
//! - bare form: `$NAME`（長さ 2 以上）
//!
//! 対応する変数がなければ元の文字列をそのまま残します。エラーにはしません。

use std::collections::BTreeMap;

use crate::domain::TaskValue;
use crate::ports::EnvLookup;

/// Placeholder は参照先の変数名を借用で保持する
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder<'a> {
    Wrapped(&'a str),
    Bare(&'a str),
}

impl<'a> Placeholder<'a> {
    /// 文字列全体が placeholder なら Some
    ///
    /// wrapped form を先に判定します。`"${"` のように閉じ括弧がないものは
    /// bare form（変数名 `{`）として扱われます。
    pub fn parse(s: &'a str) -> Option<Self> {
        if let Some(name) = s.strip_prefix("${").and_then(|rest| rest.strip_suffix('}')) {
            return Some(Placeholder::Wrapped(name));
        }
        match s.strip_prefix('$') {
            Some(name) if !name.is_empty() => Some(Placeholder::Bare(name)),
            _ => None,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            Placeholder::Wrapped(name) | Placeholder::Bare(name) => name,
        }
    }
}

/// PlaceholderResolver は TaskValue を構造再帰で解決する
///
/// 入力と環境のスナップショットだけに依存する純粋な変換です。
pub struct PlaceholderResolver<'e> {
    env: &'e dyn EnvLookup,
}

impl<'e> PlaceholderResolver<'e> {
    pub fn new(env: &'e dyn EnvLookup) -> Self {
        Self { env }
    }

    pub fn resolve(&self, value: TaskValue) -> TaskValue {
        match value {
            TaskValue::Mapping(map) => TaskValue::Mapping(
                map.into_iter()
                    .map(|(k, v)| (k, self.resolve(v)))
                    .collect::<BTreeMap<_, _>>(),
            ),
            TaskValue::Sequence(items) => {
                TaskValue::Sequence(items.into_iter().map(|v| self.resolve(v)).collect())
            }
            TaskValue::Text(s) => TaskValue::Text(self.resolve_str(s)),
            scalar @ TaskValue::Scalar(_) => scalar,
        }
    }

    /// 文字列 1 つを解決（placeholder でなければそのまま）
    pub fn resolve_str(&self, s: String) -> String {
        let Some(placeholder) = Placeholder::parse(&s) else {
            return s;
        };
        match self.env.var(placeholder.name()) {
            Some(value) => {
                tracing::debug!(name = placeholder.name(), "resolved env placeholder");
                value
            }
            None => {
                tracing::debug!(name = placeholder.name(), "env placeholder left unresolved");
                s
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Scalar;
    use crate::impls::MapEnv;
    use rstest::rstest;
    use serde_json::json;

    fn env() -> MapEnv {
        MapEnv::from_pairs([
            ("OPENAI_MODEL", "gpt-4o"),
            ("EMPTY", ""),
            ("{", "brace"),
        ])
    }

    #[rstest]
    #[case::wrapped("${OPENAI_MODEL}", Some(Placeholder::Wrapped("OPENAI_MODEL")))]
    #[case::bare("$OPENAI_MODEL", Some(Placeholder::Bare("OPENAI_MODEL")))]
    #[case::empty_wrapped("${}", Some(Placeholder::Wrapped("")))]
    #[case::unclosed("${", Some(Placeholder::Bare("{")))]
    #[case::lone_dollar("$", None)]
    #[case::plain("gpt-4o", None)]
    #[case::embedded("model-${OPENAI_MODEL}", None)]
    #[case::empty("", None)]
    fn parses_full_string_placeholders(
        #[case] input: &str,
        #[case] expected: Option<Placeholder<'static>>,
    ) {
        assert_eq!(Placeholder::parse(input), expected);
    }

    #[rstest]
    #[case::wrapped("${OPENAI_MODEL}", "gpt-4o")]
    #[case::bare("$OPENAI_MODEL", "gpt-4o")]
    #[case::set_but_empty("${EMPTY}", "")]
    #[case::missing_wrapped("${NOPE}", "${NOPE}")]
    #[case::missing_bare("$NOPE", "$NOPE")]
    #[case::unclosed("${", "brace")]
    #[case::not_a_placeholder("plain text", "plain text")]
    #[case::no_interpolation("use ${OPENAI_MODEL} here", "use ${OPENAI_MODEL} here")]
    fn resolves_strings(#[case] input: &str, #[case] expected: &str) {
        let env = env();
        let resolver = PlaceholderResolver::new(&env);
        assert_eq!(resolver.resolve_str(input.to_string()), expected);
    }

    #[test]
    fn scalars_pass_through_unchanged() {
        let env = env();
        let resolver = PlaceholderResolver::new(&env);

        let values = [
            TaskValue::Scalar(Scalar::Null),
            TaskValue::Scalar(Scalar::Bool(true)),
            TaskValue::from(json!(3)),
            TaskValue::from(json!(0.5)),
        ];
        for v in values {
            assert_eq!(resolver.resolve(v.clone()), v);
        }
    }

    #[test]
    fn resolution_preserves_structure() {
        let env = env();
        let resolver = PlaceholderResolver::new(&env);

        let input = TaskValue::from(json!({
            "model": "${OPENAI_MODEL}",
            "max_sections": 3,
            "nested": {
                "list": ["$OPENAI_MODEL", "${MISSING}", 1, [ "$OPENAI_MODEL" ]],
                "flag": false
            }
        }));

        let resolved = resolver.resolve(input.clone());

        let before = input.as_mapping().unwrap();
        let after = resolved.as_mapping().unwrap();
        assert!(before.keys().eq(after.keys()));

        let list = after["nested"].as_mapping().unwrap()["list"].as_sequence().unwrap();
        assert_eq!(list.len(), 4);

        assert_eq!(
            serde_json::Value::from(resolved),
            json!({
                "model": "gpt-4o",
                "max_sections": 3,
                "nested": {
                    "list": ["gpt-4o", "${MISSING}", 1, ["gpt-4o"]],
                    "flag": false
                }
            })
        );
    }

    #[test]
    fn keys_are_never_resolved() {
        let env = env();
        let resolver = PlaceholderResolver::new(&env);

        let resolved = resolver.resolve(TaskValue::from(json!({"$OPENAI_MODEL": "x"})));
        assert!(resolved.as_mapping().unwrap().contains_key("$OPENAI_MODEL"));
    }
}
