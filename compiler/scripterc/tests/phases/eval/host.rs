use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use scripterc::{BoolParam, ErrorCategory, NativeFunction, ScriptList, StringParam, Value};

use crate::common::{compile, global};

#[test]
fn bool_param_callback_closes_over_script_state() {
    let global = global();
    let flag = BoolParam::new(false);
    global.register_value("flag", flag.clone().into_value());

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    global.register_native(
        NativeFunction::new("record", move |_, args| {
            sink.borrow_mut().extend(args.iter().map(ToString::to_string));
            Ok(Value::Undefined)
        })
        .with_arity(1),
    );

    let program = compile(
        &global,
        "var prefix = \"flag:\"; flag.onChange(function (v) { record(prefix + v); }); flag.val = true; return flag.val;",
    );
    assert_eq!(program.run().unwrap(), Value::Bool(true));
    assert!(flag.value());
    assert!(seen.borrow().is_empty());

    flag.set_from_host(false, &global).unwrap();
    assert_eq!(*seen.borrow(), vec!["flag:false".to_string()]);
}

#[test]
fn string_param_notifies_host_on_script_writes() {
    let global = global();
    let name = StringParam::new("anon");
    global.register_value("name", name.clone().into_value());

    let heard = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&heard);
    name.on_host_change(move |value| sink.borrow_mut().push(value.to_string()));

    compile(
        &global,
        "name.val = name.val + \"!\"; name.valNoCallback = \"quiet\";",
    )
    .run()
    .unwrap();

    assert_eq!(*heard.borrow(), vec!["anon!".to_string()]);
    assert_eq!(name.value(), "quiet");
}

#[test]
fn host_objects_reject_bad_writes() {
    let global = global();
    global.register_value("flag", BoolParam::new(true).into_value());

    let err = compile(&global, "flag.val = 1;").run().unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Type);

    let err = compile(&global, "return flag.size;").run().unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Property);
    assert_eq!(
        err.to_string(),
        "PropertyError: BoolParam has no property 'size'"
    );
}

#[test]
fn host_and_script_share_lists() {
    let global = global();
    let items = ScriptList::new(vec![Value::Int(1)]);
    global.register_value("items", items.clone().into_value());

    let result = compile(&global, "items.add(2); items[0] = 10; return items.length;")
        .run()
        .unwrap();

    assert_eq!(result, Value::Int(2));
    assert_eq!(items.to_vec(), vec![Value::Int(10), Value::Int(2)]);
}

#[test]
fn host_calls_script_functions() {
    let global = global();
    let program = compile(
        &global,
        "function add(a, b) { return a + b; } return add;",
    );
    let add = program.run().unwrap();
    assert_eq!(
        global
            .call_function(&add, &[Value::Int(2), Value::Int(5)])
            .unwrap(),
        Value::Int(7)
    );

    drop(program);
    let err = global.call_function(&add, &[]).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Runtime);
}
