// JLISP Runtime Error Tests
// Every failure is an Error value; these check the message and that errors travel outward intact.

use jlisp::runtime::values::Value;
use jlisp::Runtime;

/// Test runner for runtime error tests
struct RuntimeErrorTestRunner {
    runtime: Runtime,
}

impl RuntimeErrorTestRunner {
    fn new() -> Self {
        Self {
            runtime: Runtime::default(),
        }
    }

    fn run_error_test(&self, source: &str, expected_error_contains: &str) -> Result<(), String> {
        let result = self
            .runtime
            .evaluate_source(source)
            .map_err(|e| format!("Parse error: {}", e))?;

        match result {
            Value::Error(message) if message.contains(expected_error_contains) => Ok(()),
            Value::Error(message) => Err(format!(
                "Expected error containing '{}', but got: {}",
                expected_error_contains, message
            )),
            other => Err(format!(
                "Expected error containing '{}', but got success: {}",
                expected_error_contains, other
            )),
        }
    }

    fn run_success_test(&self, source: &str, expected: &str) -> Result<(), String> {
        let result = self
            .runtime
            .evaluate_source(source)
            .map_err(|e| format!("Parse error: {}", e))?;
        if result.is_error() {
            return Err(format!("Expected {}, got {}", expected, result));
        }
        let rendered = result.to_string();
        if rendered == expected {
            Ok(())
        } else {
            Err(format!("Expected {}, got {}", expected, rendered))
        }
    }

    fn run_division_by_zero_tests(&self) -> Result<(), String> {
        self.run_error_test("/ 1 0", "Division by Zero")?;
        self.run_error_test("/ (+ 5 3) 0", "Division by Zero")?;
        // Folding stops at the zero divisor
        self.run_error_test("/ 100 0 5", "Division by Zero")?;
        self.run_error_test("eval {/ 1 (- 2 2)}", "Division by Zero")?;
        Ok(())
    }

    fn run_type_error_tests(&self) -> Result<(), String> {
        self.run_error_test("+ 1 {2}", "Cannot operate on non-number")?;
        self.run_error_test("* 2 (list 1)", "Cannot operate on non-number")?;
        self.run_error_test("head 1", "Function 'head' passed incorrect type!")?;
        self.run_error_test("tail (+ 1 2)", "Function 'tail' passed incorrect type!")?;
        self.run_error_test("join {1} 2", "Function 'join' passed incorrect type!")?;
        self.run_error_test("eval 5", "Function 'eval' passed incorrect type!")?;
        Ok(())
    }

    fn run_empty_list_tests(&self) -> Result<(), String> {
        self.run_error_test("head {}", "Function 'head' passed {}!")?;
        self.run_error_test("tail {}", "Function 'tail' passed {}!")?;
        self.run_error_test("head (tail {1})", "Function 'head' passed {}!")?;
        Ok(())
    }

    fn run_arity_mismatch_tests(&self) -> Result<(), String> {
        self.run_error_test("head {1} {2}", "incorrect number of arguments")?;
        self.run_error_test("eval {1} {2}", "incorrect number of arguments")?;
        self.run_error_test("tail {1} {2} {3}", "Got 3, Expected 1.")?;
        // A lone symbol is a singleton expression, not a call
        self.run_success_test("(+)", "+")?;
        Ok(())
    }

    fn run_malformed_expression_tests(&self) -> Result<(), String> {
        self.run_error_test("1 2 3", "S-expression does not start with a symbol")?;
        self.run_error_test("eval {1 2 3}", "S-expression does not start with a symbol")?;
        self.run_error_test("({+} 1)", "S-expression does not start with a symbol")?;
        Ok(())
    }

    fn run_number_tests(&self) -> Result<(), String> {
        self.run_error_test("+ 1 99999999999999999999", "invalid number")?;
        self.run_error_test("* 9223372036854775807 2", "Integer overflow")?;
        self.run_success_test("- -9223372036854775807 1", "-9223372036854775808")?;
        Ok(())
    }

    fn run_error_propagation_tests(&self) -> Result<(), String> {
        // Errors pass through every enclosing expression unchanged
        self.run_error_test("+ 1 (* 2 (/ 3 0))", "Division by Zero")?;
        self.run_error_test("list 1 (head {}) 3", "Function 'head' passed {}!")?;
        // First error by position wins
        self.run_error_test("+ (/ 1 0) (head {})", "Division by Zero")?;
        self.run_error_test("+ (head {}) (/ 1 0)", "Function 'head' passed {}!")?;
        // A quoted failing expression is inert until evaluated
        self.run_success_test("head {(/ 1 0) 2}", "{(/ 1 0)}")?;
        self.run_error_test("eval (head {(/ 1 0) 2})", "Division by Zero")?;
        Ok(())
    }
}

#[test]
fn test_division_by_zero_errors() {
    let runner = RuntimeErrorTestRunner::new();
    runner
        .run_division_by_zero_tests()
        .expect("division by zero tests");
}

#[test]
fn test_type_mismatch_errors() {
    let runner = RuntimeErrorTestRunner::new();
    runner.run_type_error_tests().expect("type error tests");
}

#[test]
fn test_empty_list_errors() {
    let runner = RuntimeErrorTestRunner::new();
    runner.run_empty_list_tests().expect("empty list tests");
}

#[test]
fn test_arity_mismatch_errors() {
    let runner = RuntimeErrorTestRunner::new();
    runner
        .run_arity_mismatch_tests()
        .expect("arity mismatch tests");
}

#[test]
fn test_malformed_expression_errors() {
    let runner = RuntimeErrorTestRunner::new();
    runner
        .run_malformed_expression_tests()
        .expect("malformed expression tests");
}

#[test]
fn test_number_errors() {
    let runner = RuntimeErrorTestRunner::new();
    runner.run_number_tests().expect("number tests");
}

#[test]
fn test_error_propagation() {
    let runner = RuntimeErrorTestRunner::new();
    runner
        .run_error_propagation_tests()
        .expect("error propagation tests");
}
