//! Extraction fixtures: one source file per language quirk, with the
//! exact signatures the extractor must report.

use std::fs;
use std::path::Path;

use fuzzscout::{Candidate, Extractor, Language, Parameter, Visibility};

fn extract(rel: &str) -> Vec<Candidate> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(rel);
    let source = fs::read(&path).unwrap();
    let language = Language::from_path(&path).unwrap();
    Extractor::new(rel, language, &source).extract().unwrap()
}

fn names(candidates: &[Candidate]) -> Vec<&str> {
    candidates
        .iter()
        .map(|c| c.function.name.as_str())
        .collect()
}

#[test]
fn go_functions_in_source_order() {
    let candidates = extract("golang/function.go");
    assert_eq!(names(&candidates), ["A", "B", "C", "D", "e"]);
    for c in &candidates {
        assert_eq!(c.package.as_deref(), Some("examples"));
        assert!(c.class.is_none());
        assert_eq!(c.language, Language::Go);
        assert!(c.cfg.is_some());
    }

    let a = &candidates[0].function;
    assert_eq!(a.parameters, [Parameter::new("a", "string")]);
    assert_eq!(a.return_values, [Parameter::unnamed("int8")]);
    assert_eq!(a.visibility, Visibility::Public);

    // Named result list.
    let b = &candidates[1].function;
    assert!(b.parameters.is_empty());
    assert_eq!(b.return_values, [Parameter::new("err", "error")]);

    let c = &candidates[2].function;
    assert!(c.parameters.is_empty());
    assert!(c.return_values.is_empty());

    assert_eq!(
        candidates[3].function.parameters,
        [Parameter::new("d", "string")]
    );

    // Lowercase first rune means unexported.
    assert_eq!(candidates[4].function.visibility, Visibility::Private);
}

#[test]
fn go_methods_carry_the_receiver_type() {
    let candidates = extract("golang/method.go");
    assert_eq!(names(&candidates), ["A", "B", "C", "D", "E", "F"]);
    for c in &candidates {
        let class = c.class.as_ref().unwrap();
        // Pointer markup is stripped from the receiver type.
        assert_eq!(class.name, "MyStruct");
        assert!(class.constructors.is_empty());
        assert_eq!(c.package.as_deref(), Some("examples"));
    }

    let a = &candidates[0].function;
    assert_eq!(
        a.parameters,
        [Parameter::new("a", "int"), Parameter::new("b", "uint")]
    );
    assert_eq!(
        a.return_values,
        [Parameter::new("c", "string"), Parameter::new("err", "error")]
    );

    assert_eq!(
        candidates[3].function.return_values,
        [Parameter::unnamed("error")]
    );

    // Unnamed result list keeps the types with the name sentinel.
    assert_eq!(
        candidates[4].function.return_values,
        [Parameter::unnamed("string"), Parameter::unnamed("error")]
    );
}

#[test]
fn java_visibility_and_return_types() {
    let candidates = extract("java/Test.java");
    assert_eq!(
        names(&candidates),
        ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "load"]
    );
    for c in &candidates {
        assert_eq!(c.package.as_deref(), Some("org.example"));
        let class = c.class.as_ref().unwrap();
        assert_eq!(class.name, "Foo");
        assert_eq!(class.constructors.len(), 1);
        assert_eq!(class.constructors[0].name, "Foo");
        assert_eq!(
            class.constructors[0].parameters,
            [Parameter::new("seed", "int")]
        );
    }

    // void means no return values.
    let a = &candidates[0].function;
    assert_eq!(a.parameters, [Parameter::new("a", "String")]);
    assert!(a.return_values.is_empty());
    assert_eq!(a.visibility, Visibility::Public);

    assert_eq!(
        candidates[1].function.return_values,
        [Parameter::unnamed("String")]
    );
    assert_eq!(candidates[2].function.visibility, Visibility::Private);

    let d = &candidates[3].function;
    assert_eq!(d.visibility, Visibility::Protected);
    assert_eq!(
        d.parameters,
        [Parameter::new("d", "int"), Parameter::new("e", "String")]
    );

    let returns: Vec<&str> = candidates[4..13]
        .iter()
        .map(|c| c.function.return_values[0].ty.as_str())
        .collect();
    assert_eq!(
        returns,
        ["int", "float", "char", "double", "boolean", "byte", "long", "long[]", "String[]"]
    );

    let load = &candidates[13].function;
    assert!(load.is_static);
    assert_eq!(load.parameters, [Parameter::new("data", "byte[]")]);
}

#[test]
fn java_overloads_are_separate_candidates() {
    let candidates = extract("java/Overloading.java");
    assert_eq!(names(&candidates), ["A", "A", "A"]);
    let arities: Vec<usize> = candidates
        .iter()
        .map(|c| c.function.parameters.len())
        .collect();
    assert_eq!(arities, [0, 1, 1]);
    assert_eq!(candidates[1].function.parameters[0].ty, "String");
    assert_eq!(candidates[2].function.parameters[0].ty, "int");
}

#[test]
fn javascript_bindings_count_as_functions() {
    let candidates = extract("javascript/declaration.js");
    // Declaration, arrow binding, function-expression binding.
    assert_eq!(names(&candidates), ["a", "b", "c"]);
    for c in &candidates {
        assert!(c.package.is_none());
        assert!(c.class.is_none());
        assert!(c.cfg.is_some(), "{} has no graph", c.function.name);
        assert_eq!(c.function.visibility, Visibility::Public);
    }
}

#[test]
fn javascript_class_members() {
    let candidates = extract("javascript/method.js");
    assert_eq!(names(&candidates), ["A", "B", "C"]);
    for c in &candidates {
        let class = c.class.as_ref().unwrap();
        assert_eq!(class.name, "Foo");
        assert_eq!(class.constructors.len(), 1);
        assert_eq!(class.constructors[0].name, "constructor");
    }

    let a = &candidates[0].function;
    assert_eq!(a.visibility, Visibility::Public);
    assert!(!a.is_static);

    assert!(candidates[1].function.is_static);

    // #-prefixed members are private; the marker is stripped.
    let c = &candidates[2].function;
    assert_eq!(c.name, "C");
    assert_eq!(c.visibility, Visibility::Private);
}

#[test]
fn typescript_annotations_and_accessibility() {
    let candidates = extract("typescript/function.ts");
    assert_eq!(names(&candidates), ["A", "b"]);

    let a = &candidates[0].function;
    assert_eq!(
        a.parameters,
        [Parameter::new("a", "number"), Parameter::new("b", "string")]
    );
    assert_eq!(a.return_values, [Parameter::unnamed("number")]);

    let b = &candidates[1];
    assert_eq!(b.class.as_ref().unwrap().name, "Foo");
    assert_eq!(b.function.visibility, Visibility::Private);
    assert_eq!(b.function.parameters, [Parameter::new("x", "number")]);
    // A void return annotation reports no return values.
    assert!(b.function.return_values.is_empty());
}

#[test]
fn c_declarator_chains_and_void() {
    let candidates = extract("c/function.c");
    assert_eq!(names(&candidates), ["main", "greet", "parse_buf"]);
    for c in &candidates {
        assert!(c.class.is_none());
        assert!(c.package.is_none());
        assert_eq!(c.function.visibility, Visibility::Public);
    }

    assert_eq!(
        candidates[0].function.return_values,
        [Parameter::unnamed("int")]
    );
    assert!(candidates[0].function.parameters.is_empty());

    // void return type means no return values.
    assert!(candidates[1].function.return_values.is_empty());

    // The name sits inside a pointer declarator chain.
    let parse = &candidates[2].function;
    assert_eq!(
        parse.parameters,
        [Parameter::new("buf", "char"), Parameter::new("len", "int")]
    );
    assert_eq!(parse.return_values, [Parameter::unnamed("int")]);
}
