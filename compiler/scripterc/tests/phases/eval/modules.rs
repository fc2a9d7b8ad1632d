use pretty_assertions::assert_eq;
use scripterc::{ErrorCategory, EvalErrorKind, ModuleStatus, Value};

use crate::common::{compile, global};

#[test]
fn imports_bind_exported_values() {
    let global = global();
    scripterc::declare_module(
        &global,
        "math",
        "export var base = 10; export function twice(n) { return n * 2; }",
    )
    .unwrap();
    let program = compile(
        &global,
        "import { base, twice } from \"math\"; return twice(base) + 1;",
    );
    assert_eq!(program.run().unwrap(), Value::Int(21));
    assert_eq!(global.module_status("math"), ModuleStatus::Imported);
}

#[test]
fn module_body_runs_once() {
    let global = global();
    scripterc::declare_module(&global, "lib", "print(\"loading\"); export var x = 1;").unwrap();
    let program = compile(&global, "import { x } from \"lib\"; return x;");
    program.run().unwrap();
    program.run().unwrap();
    compile(&global, "import { x } from \"lib\";").run().unwrap();
    assert_eq!(global.print_output(), "loading\n");
}

#[test]
fn redeclaring_a_module_reruns_it() {
    let global = global();
    let program = compile(&global, "import { v } from \"cfg\"; return v;");

    scripterc::declare_module(&global, "cfg", "export var v = \"first\";").unwrap();
    assert_eq!(program.run().unwrap(), Value::from("first"));

    scripterc::declare_module(&global, "cfg", "export var v = \"second\";").unwrap();
    assert_eq!(global.module_status("cfg"), ModuleStatus::Declared);
    assert_eq!(program.run().unwrap(), Value::from("second"));
}

#[test]
fn exported_functions_keep_module_state() {
    let global = global();
    scripterc::declare_module(
        &global,
        "counter",
        "var count = 0; export function next() { count++; return count; }",
    )
    .unwrap();
    let program = compile(&global, "import { next } from \"counter\"; return next();");
    assert_eq!(program.run().unwrap(), Value::Int(1));
    assert_eq!(program.run().unwrap(), Value::Int(2));
}

#[test]
fn missing_export_names_module_and_binding() {
    let global = global();
    scripterc::declare_module(&global, "lib", "export var x = 1;").unwrap();
    let err = compile(&global, "import { y } from \"lib\";").run().unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Module);
    assert_eq!(
        err.to_string(),
        "ModuleError: Module 'lib' does not export 'y'"
    );
}

#[test]
fn undeclared_module_is_a_module_error() {
    let global = global();
    let err = compile(&global, "import { x } from \"nowhere\";").run().unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Module);
    assert_eq!(
        err.to_string(),
        "ModuleError: Module 'nowhere' was not declared"
    );
}

#[test]
fn cyclic_imports_fail() {
    let global = global();
    scripterc::declare_module(&global, "a", "import { b } from \"b\"; export var a = 1;").unwrap();
    scripterc::declare_module(&global, "b", "import { a } from \"a\"; export var b = 2;").unwrap();

    let err = compile(&global, "import { a } from \"a\";").run().unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::ImportCycle {
            module: "a".to_string()
        }
    );
    assert_eq!(global.module_status("a"), ModuleStatus::Declared);
    assert_eq!(global.module_status("b"), ModuleStatus::Declared);
}

#[test]
fn failed_module_can_be_imported_again() {
    let global = global();
    scripterc::declare_module(
        &global,
        "flaky",
        "static var attempts = 0; attempts++; if (attempts < 2) { throw \"not yet\"; } export var ok = attempts;",
    )
    .unwrap();
    let program = compile(&global, "import { ok } from \"flaky\"; return ok;");

    let err = program.run().unwrap_err();
    assert_eq!(err.message, "not yet");
    assert_eq!(global.module_status("flaky"), ModuleStatus::Declared);
    assert_eq!(program.run().unwrap(), Value::Int(2));
}
