use super::*;

#[test]
fn leia_definition() {
    let leia = language();
    assert_eq!(leia.id, "leia");
    assert_eq!(leia.token_postfix, ".leia");
    assert_eq!(leia.keywords, KEYWORDS);
    assert_eq!(leia.operators, OPERATORS);
    assert!(std::ptr::eq(leia.rules, RuleTable::get()));
}

#[test]
fn language_is_a_single_static() {
    assert!(std::ptr::eq(language(), language()));
}

#[test]
fn scope_appends_postfix() {
    assert_eq!(language().scope(TokenCategory::Float), "number.float.leia");
    assert_eq!(language().scope(TokenCategory::Whitespace), "whitespace.leia");
}

#[test]
fn register_is_idempotent() {
    let mut registry = LanguageRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(register(&mut registry), Registration::Registered);
    assert_eq!(register(&mut registry), Registration::AlreadyRegistered);
    assert_eq!(registry.len(), 1);
}

#[test]
fn first_registration_wins() {
    static IMPOSTOR: LazyLock<Language> = LazyLock::new(|| Language {
        id: "leia",
        token_postfix: ".other",
        extensions: &["other"],
        keywords: &[],
        operators: &[],
        rules: RuleTable::get(),
    });

    let mut registry = LanguageRegistry::new();
    register(&mut registry);
    assert_eq!(registry.register(&IMPOSTOR), Registration::AlreadyRegistered);
    let kept = registry.get("leia").unwrap();
    assert_eq!(kept.token_postfix, ".leia");
}

#[test]
fn lookup_by_id_and_extension() {
    let mut registry = LanguageRegistry::new();
    assert!(registry.get("leia").is_none());
    register(&mut registry);
    assert!(registry.get("leia").is_some());
    assert!(registry.get("rust").is_none());
    assert_eq!(registry.for_extension("leia").map(|l| l.id), Some("leia"));
    assert!(registry.for_extension("rs").is_none());
}

#[test]
fn debug_omits_tables() {
    let rendered = format!("{:?}", language());
    assert!(rendered.contains("\"leia\""));
    assert!(!rendered.contains("identifier"));
}
