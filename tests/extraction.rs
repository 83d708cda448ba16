//! Name extraction and rich context integration tests
//!
//! Exercises the extraction strategies and custom hooks against real
//! grammars: call targets across call shapes, assignment-target naming for
//! anonymous constructs, declarator unwrapping, and native payloads.

mod common;

use common::{classify_source, find_all_kinds, find_kind};
use sematree::{Category, Lang, NativeContext};

// =============================================================================
// FindIdentifier / custom hooks: definition names
// =============================================================================

#[test]
fn test_rust_function_and_impl_names() {
    let source = "\
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }
}
";
    let forest = classify_source(Lang::Rust, source);

    let st = find_kind(&forest, "struct_item").unwrap();
    assert_eq!(st.name.as_deref(), Some("Stack"));

    // The impl's self type sits behind generic arguments
    let im = find_kind(&forest, "impl_item").unwrap();
    assert_eq!(im.name.as_deref(), Some("Stack"));

    let func = find_kind(&forest, "function_item").unwrap();
    assert_eq!(func.name.as_deref(), Some("push"));
}

#[test]
fn test_c_declarator_names() {
    let source = "\
int add(int a, int b);

int add(int a, int b) {
    return a + b;
}

int *head = 0;
";
    let forest = classify_source(Lang::C, source);

    let func = find_kind(&forest, "function_definition").unwrap();
    assert_eq!(func.name.as_deref(), Some("add"));

    // Prototype name comes through the same declarator unwrapping
    let decl = find_kind(&forest, "declaration").unwrap();
    assert_eq!(decl.name.as_deref(), Some("add"));

    // Pointer declarators unwrap to the declared identifier
    let init = find_kind(&forest, "init_declarator").unwrap();
    assert_eq!(init.name.as_deref(), Some("head"));
}

#[test]
fn test_cpp_qualified_member_definition() {
    let source = "\
int Counter::increment() {
    return ++value;
}
";
    let forest = classify_source(Lang::Cpp, source);
    let func = find_kind(&forest, "function_definition").unwrap();
    assert_eq!(func.name.as_deref(), Some("increment"));
}

#[test]
fn test_python_decorated_definition_name() {
    let source = "\
@route('/index')
def index():
    return 'ok'
";
    let forest = classify_source(Lang::Python, source);
    let wrapped = find_kind(&forest, "decorated_definition").unwrap();
    assert_eq!(wrapped.name.as_deref(), Some("index"));
    let func = find_kind(&forest, "function_definition").unwrap();
    assert_eq!(func.name.as_deref(), Some("index"));
}

#[test]
fn test_bash_function_shapes() {
    let source = "\
function greet {
  echo hello
}

farewell() {
  echo bye
}
";
    let forest = classify_source(Lang::Bash, source);
    let functions = find_all_kinds(&forest, "function_definition");
    assert_eq!(functions.len(), 2);
    assert_eq!(functions[0].name.as_deref(), Some("greet"));
    assert_eq!(functions[1].name.as_deref(), Some("farewell"));
}

#[test]
fn test_go_short_var_declaration_name() {
    let source = "package main\n\nfunc main() {\n\ttotal := compute()\n}\n";
    let forest = classify_source(Lang::Go, source);
    let short = find_kind(&forest, "short_var_declaration").unwrap();
    assert_eq!(short.name.as_deref(), Some("total"));
}

// =============================================================================
// FindCallTarget: plain, method, constructor, macro
// =============================================================================

#[test]
fn test_call_targets_across_shapes() {
    let js = "boot();\napp.listen(3000);\nconst s = new Server();\n";
    let forest = classify_source(Lang::JavaScript, js);
    let calls = find_all_kinds(&forest, "call_expression");
    assert_eq!(calls[0].name.as_deref(), Some("boot"));
    assert_eq!(calls[1].name.as_deref(), Some("listen"));
    let ctor = find_kind(&forest, "new_expression").unwrap();
    assert_eq!(ctor.name.as_deref(), Some("Server"));

    let rust = "fn main() { println!(\"hi\"); }\n";
    let forest = classify_source(Lang::Rust, rust);
    let mac = find_kind(&forest, "macro_invocation").unwrap();
    assert_eq!(mac.name.as_deref(), Some("println"));
    assert_eq!(
        mac.semantic_type.category(),
        Category::ComputationCall
    );

    let java = "class A { void run(Worker w) { w.start(); new Worker(); } }\n";
    let forest = classify_source(Lang::Java, java);
    let call = find_kind(&forest, "method_invocation").unwrap();
    assert_eq!(call.name.as_deref(), Some("start"));
    let ctor = find_kind(&forest, "object_creation_expression").unwrap();
    assert_eq!(ctor.name.as_deref(), Some("Worker"));
}

#[test]
fn test_python_method_call_target() {
    let source = "worker.queue.drain()\n";
    let forest = classify_source(Lang::Python, source);
    let call = find_kind(&forest, "call").unwrap();
    assert_eq!(call.name.as_deref(), Some("drain"));
}

// =============================================================================
// FindAssignmentTarget: bound vs anonymous
// =============================================================================

#[test]
fn test_lambda_bound_by_assignment_gets_lhs_name() {
    let js = "const onReady = () => start();\n";
    let forest = classify_source(Lang::JavaScript, js);
    let arrow = find_kind(&forest, "arrow_function").unwrap();
    assert_eq!(arrow.name.as_deref(), Some("onReady"));

    let py = "square = lambda x: x * x\n";
    let forest = classify_source(Lang::Python, py);
    let lambda = find_kind(&forest, "lambda").unwrap();
    assert_eq!(lambda.name.as_deref(), Some("square"));

    let rs = "fn main() { let double = |x: i32| x * 2; }\n";
    let forest = classify_source(Lang::Rust, rs);
    let closure = find_kind(&forest, "closure_expression").unwrap();
    assert_eq!(closure.name.as_deref(), Some("double"));
}

#[test]
fn test_lambda_in_argument_position_stays_anonymous() {
    let js = "setTimeout(() => start(), 10);\n";
    let forest = classify_source(Lang::JavaScript, js);
    let arrow = find_kind(&forest, "arrow_function").unwrap();
    assert_eq!(arrow.name, None);

    let py = "items.sort(key=lambda x: x.rank)\n";
    let forest = classify_source(Lang::Python, py);
    let lambda = find_kind(&forest, "lambda").unwrap();
    assert_eq!(lambda.name, None);
}

// =============================================================================
// FindProperty
// =============================================================================

#[test]
fn test_member_access_names_the_accessed_member() {
    let js = "config.server.port;\n";
    let forest = classify_source(Lang::JavaScript, js);
    let members = find_all_kinds(&forest, "member_expression");
    // Outermost access first in preorder: `.port`, then `.server`
    assert_eq!(members[0].name.as_deref(), Some("port"));
    assert_eq!(members[1].name.as_deref(), Some("server"));

    let py = "self.engine.dialect\n";
    let forest = classify_source(Lang::Python, py);
    let attrs = find_all_kinds(&forest, "attribute");
    assert_eq!(attrs[0].name.as_deref(), Some("dialect"));
}

// =============================================================================
// Native context payloads
// =============================================================================

#[test]
fn test_rust_function_signature_payload() {
    let source = "pub fn add(a: i32, b: i32) -> i32 { a + b }\n";
    let forest = classify_source(Lang::Rust, source);
    let func = find_kind(&forest, "function_item").unwrap();

    let Some(NativeContext::FunctionSignature {
        name,
        parameters,
        return_type,
        modifiers,
    }) = &func.native_context
    else {
        panic!("function_item should carry a signature payload");
    };

    assert_eq!(name.as_deref(), Some("add"));
    assert_eq!(return_type.as_deref(), Some("i32"));
    assert_eq!(parameters.len(), 2);
    assert_eq!(parameters[0].name.as_deref(), Some("a"));
    assert_eq!(parameters[0].type_annotation.as_deref(), Some("i32"));
    assert!(modifiers.iter().any(|m| m == "pub"));
}

#[test]
fn test_python_signature_with_defaults_and_decorators() {
    let source = "\
@cached
def fetch(url, timeout: int = 30) -> bytes:
    return download(url, timeout)
";
    let forest = classify_source(Lang::Python, source);
    let func = find_kind(&forest, "function_definition").unwrap();

    let Some(NativeContext::FunctionSignature {
        parameters,
        return_type,
        modifiers,
        ..
    }) = &func.native_context
    else {
        panic!("expected signature payload");
    };

    assert_eq!(return_type.as_deref(), Some("bytes"));
    assert_eq!(parameters.len(), 2);
    assert_eq!(parameters[1].name.as_deref(), Some("timeout"));
    assert_eq!(parameters[1].type_annotation.as_deref(), Some("int"));
    assert_eq!(parameters[1].default_value.as_deref(), Some("30"));
    assert!(modifiers.iter().any(|m| m.contains("@cached")));
}

#[test]
fn test_class_summary_payload() {
    let source = "\
class Dog extends Animal {
  bark() { return 'woof'; }
  sit() { return true; }
}
";
    let forest = classify_source(Lang::JavaScript, source);
    let class = find_kind(&forest, "class_declaration").unwrap();

    let Some(NativeContext::ClassSummary {
        name,
        bases,
        methods,
    }) = &class.native_context
    else {
        panic!("expected class summary payload");
    };

    assert_eq!(name.as_deref(), Some("Dog"));
    assert_eq!(bases, &vec!["Animal".to_string()]);
    assert_eq!(methods, &vec!["bark".to_string(), "sit".to_string()]);
}

#[test]
fn test_variable_binding_payload() {
    let source = "const port = 8080;\n";
    let forest = classify_source(Lang::JavaScript, source);
    let declarator = find_kind(&forest, "variable_declarator").unwrap();

    let Some(NativeContext::VariableBinding {
        name, initializer, ..
    }) = &declarator.native_context
    else {
        panic!("expected variable binding payload");
    };

    assert_eq!(name.as_deref(), Some("port"));
    assert_eq!(initializer.as_deref(), Some("8080"));
}

#[test]
fn test_signature_tolerates_untyped_grammar() {
    // Ruby has no parameter types or return annotations; the payload is
    // partially populated, never missing
    let source = "def pay(amount, memo)\n  amount\nend\n";
    let forest = classify_source(Lang::Ruby, source);
    let method = find_kind(&forest, "method").unwrap();

    let Some(NativeContext::FunctionSignature {
        name,
        parameters,
        return_type,
        ..
    }) = &method.native_context
    else {
        panic!("expected signature payload");
    };

    assert_eq!(name.as_deref(), Some("pay"));
    assert_eq!(parameters.len(), 2);
    assert_eq!(parameters[0].name.as_deref(), Some("amount"));
    assert!(return_type.is_none());
    assert!(parameters.iter().all(|p| p.type_annotation.is_none()));
}
