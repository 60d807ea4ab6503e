use std::{fs, io::Cursor};

use golfstack::{evaluate, evaluate_with_io};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn reference_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("docs").into_iter()
                            .filter_map(Result::ok)
                            .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (program, expected) in extract_examples(&content) {
            count += 1;
            match evaluate(&program) {
                Ok(rendered) => {
                    if let Some(expected) = expected {
                        assert_eq!(rendered, expected, "example `{program}` in {path:?}");
                    }
                },
                Err(e) => panic!("Example `{program}` in {path:?} failed: {e}"),
            }
        }
    }

    assert!(count > 0, "No golfstack examples found in docs");
}

/// Collects the programs of every ```golfstack block, each paired with the
/// `=> expected` line that follows it, if any.
fn extract_examples(content: &str) -> Vec<(String, Option<String>)> {
    let mut examples: Vec<(String, Option<String>)> = Vec::new();
    let mut inside = false;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```golfstack") {
            inside = true;
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            continue;
        }
        if !inside || trimmed.is_empty() {
            continue;
        }

        if let Some(expected) = trimmed.strip_prefix("=>") {
            if let Some((_, slot @ None)) = examples.last_mut() {
                *slot = Some(expected.strip_prefix(' ').unwrap_or(expected).to_string());
            }
        } else {
            examples.push((line.to_string(), None));
        }
    }

    examples
}

fn assert_output(src: &str, expected: &str) {
    match evaluate(src) {
        Ok(rendered) => assert_eq!(rendered, expected, "program `{src}`"),
        Err(e) => panic!("Program `{src}` failed: {e}"),
    }
}

fn assert_failure(src: &str) -> String {
    match evaluate(src) {
        Ok(rendered) => panic!("Program `{src}` succeeded with `{rendered}` but was expected to fail"),
        Err(e) => e.to_string(),
    }
}

/// Runs `src` with `input` on the input stream; returns the final stack and
/// everything printed.
fn run_with_input(src: &str, input: &str) -> (String, String) {
    let mut printed: Vec<u8> = Vec::new();
    let rendered = evaluate_with_io(src, Cursor::new(input.as_bytes()), &mut printed)
        .unwrap_or_else(|e| panic!("Program `{src}` failed: {e}"));
    (String::from_utf8_lossy(&rendered).into_owned(), String::from_utf8_lossy(&printed).into_owned())
}

#[test]
fn literals() {
    assert_output("", "");
    assert_output("42", "42");
    assert_output("1 2 3", "123");
    assert_output("2.5", "2.5");
    assert_output("3.", "3");
    assert_output(".5", "0.5");
    assert_output("-.5", "-0.5");
    assert_output("1000000.0", "1e+06");
    assert_output("\"hello world\"", "hello world");
    assert_output("{1 2+}", "{1 2+}");
    assert_output("{[1]}", "{[1]}");
}

#[test]
fn signs_bind_to_the_following_digits() {
    assert_output("5 2-", "3");
    assert_output("7 -3", "7-3");
    assert_output("5-2", "5-2");
}

#[test]
fn unterminated_literals_run_to_the_end_of_the_line() {
    assert_output("\"abc", "abc");
    assert_output("[1 2", "12");
    assert_output("{1+", "{1+}");
}

#[test]
fn integer_arithmetic() {
    assert_output("3 4* 1+", "13");
    assert_output("7 3-", "4");
    assert_output("7 2/", "3");
    assert_output("-7 2/", "-3");
    assert_output("-7 2%", "-1");
    assert_output("2 10#", "1024");
    assert_output("9223372036854775807 1+", "-9223372036854775808");
}

#[test]
fn float_arithmetic_wins_the_ladder() {
    assert_output("7 2.0/", "3.5");
    assert_output("2 0.5#", "1.41421");
    assert_output("1.0 3/", "0.333333");
    assert_output("1.0 0/", "inf");
    assert_output("1.5 1+", "2.5");
}

#[test]
fn float_modulo_truncates_its_operands() {
    assert_output("7.9 2%", "1");
    assert_output("2.5 2%", "0");
    assert_output("-7.5 2%", "-1");
}

#[test]
fn character_arithmetic_stays_in_eight_bits() {
    assert_output("S S+", "@");
    assert_output("S 1+", "33");
    assert_output("S S*", "\u{0}");
    assert_output("S)", "!");
    assert_output("S~i", "223");
}

#[test]
fn arithmetic_faults_abort_the_line() {
    assert_eq!(assert_failure("1 0/"), "Error at column 3: Division by zero.");
    assert_eq!(assert_failure("[1 0%]"), "Error at column 4: Division by zero.");
    assert_failure("1.5 0.5%");
    assert_failure("S N N-/");
    assert_failure("-9223372036854775808 -1/");
    assert_eq!(assert_failure("99999999999999999999"),
               "Error at column 0: Invalid numeric literal '99999999999999999999'.");
}

#[test]
fn bitwise_operators_read_integers() {
    assert_output("6 3&", "2");
    assert_output("6 3|", "7");
    assert_output("6 3^", "5");
    assert_output("6.9 3&", "2");
    assert_output("0~", "-1");
    assert_output("2.5~", "-3");
}

#[test]
fn unary_operators_keep_the_type() {
    assert_output("5)", "6");
    assert_output("5(", "4");
    assert_output("1.5)", "2.5");
    assert_output("0!", "1");
    assert_output("5!", "0");
    assert_output("0.5!", "1");
}

#[test]
fn rejected_commands_leave_the_stack_alone() {
    assert_output("\"abc\" 3+", "abc3");
    assert_output("\"ab\" 1.5+", "ab1.5");
    assert_output("+", "");
    assert_output("1+", "1");
    assert_output("1 2?", "12");
    assert_output("1\\", "1");
    assert_output("1 2@", "12");
    assert_output(":X", "");
    assert_output("[1 2]i,", "2");
}

#[test]
fn unclaimed_commands_are_ignored() {
    assert_output("1 k 2", "12");
    assert_output("1 e", "1");
    assert_output("1ez", "1");
    assert_output(": 1", "1");
    assert_output("1 :a", "1");
}

#[test]
fn stack_commands() {
    assert_output("5_", "55");
    assert_output("1 2;", "1");
    assert_output("1 2\\", "21");
    assert_output("1 2 3@", "231");
    assert_output("1 2 3 1$", "1232");
    assert_output("1 2 3 0$", "1233");
    assert_output("1 2 9$", "120");
    assert_output("1 -1$", "10");
}

#[test]
fn conversions() {
    assert_output("\"42abc\"i 1+", "43");
    assert_output("\"3.5\"f 2*", "7");
    assert_output("3.7i", "3");
    assert_output("65c", "A");
    assert_output("\"A\"c i", "65");
    assert_output("\"abc\"i", "1");
    assert_output("\"x=9\"i", "1");
    assert_output("\"  -7 apples\"i", "-7");
    assert_output("\"\"f", "1");
    assert_output("\"2e3\"f", "2000");
    assert_output("12s,", "2");
    assert_output("1.5s,", "3");
    assert_output("[1 2]s", "12");
}

#[test]
fn variables() {
    assert_output("A B+", "21");
    assert_output("N", "\n");
    assert_output("S", " ");
    assert_output("X Y Z", "012");
    assert_output("5:X X X*", "525");
    assert_output("7:Q [Q Q+]", "714");
    assert_output("[3:W] W", "33");
}

#[test]
fn array_literals_nest() {
    assert_output("[1 2 3]", "123");
    assert_output("[1 [2 3] 4],", "3");
    assert_output("9 [1 2+]", "93");
    assert_output("[]", "");
    assert_output("[1 2 3]~++", "6");
    assert_output("[\"ab\"~],", "2");
}

#[test]
fn range_and_length() {
    assert_output("4,", "0123");
    assert_output("0,", "");
    assert_output("-3,,", "0");
    assert_output("\"hello\",", "5");
    assert_output("[1 2 3],", "3");
}

#[test]
fn concatenation() {
    assert_output("\"ab\" \"cd\"+", "abcd");
    assert_output("[1 2] [3]+,", "3");
    assert_output("\"ab\" S+,", "2");
    assert_output("S \"ab\"+(", "ab ");
    assert_output("[1 2] 3+,", "2");
    assert_output("3 [1 2]+)", "312");
    assert_output("[1] \"ab\"+,", "2");
    assert_output("{a}{b}+,", "2");
    assert_output("\"ab\" {c}+", "ab{c}");
}

#[test]
fn repetition() {
    assert_output("\"ab\" 3*", "ababab");
    assert_output("[1 2] 2*", "1212");
    assert_output("[1 2] 0*,", "0");
    assert_output("\"ab\" -1*", "");
}

#[test]
fn oversized_arrays_are_reported() {
    assert_eq!(assert_failure("\"ab\" 9223372036854775807*"),
               "Error at column 24: Result too large to represent.");
    assert_eq!(assert_failure("[1] 9223372036854775807*"),
               "Error at column 23: Result too large to represent.");
    assert_eq!(assert_failure("9223372036854775807,"),
               "Error at column 19: Result too large to represent.");
}

#[test]
fn indexing_consumes_the_array() {
    assert_output("[5 6 7] 1=", "6");
    assert_output("\"abc\" 2=", "c");
    assert_output("[5 6 7] 9=", "0");
    assert_output("[5 6 7] -1=", "0");
}

#[test]
fn find() {
    assert_output("\"hello\" \"ll\"#", "2");
    assert_output("\"hello\" \"z\"#", "-1");
    assert_output("\"hello\" \"\"#", "0");
}

#[test]
fn first_and_last() {
    assert_output("[1 2 3](", "231");
    assert_output("[1 2 3]);", "12");
    assert_output("[1 2 3])\\,", "32");
    assert_output("\"abc\"(", "bca");
    assert_output("\"abc\")", "abc");
    assert_output("[](", "0");
    assert_output("\"\")", "0");
}

#[test]
fn taking_ends_drains_an_array() {
    assert_output("\"abc\");););,", "0");
    assert_output("\"abc\"(;(;(;,", "0");
    assert_output("[1 2 3]);););,", "0");
    assert_output("\"abc\"(;(;(;(", "0");
}

#[test]
fn keep_first_and_last() {
    assert_output("[1 2 3 4] 2<", "12");
    assert_output("[1 2 3 4] 2>", "34");
    assert_output("\"hello\" 10<", "hello");
    assert_output("\"hello\" 3>", "llo");
    assert_output("\"hello\" -2>", "");
}

#[test]
fn split() {
    assert_output("\"a,b,,c\" \",\"/", "abc");
    assert_output("\"a,b,,c\" \",\"/,", "3");
    assert_output("\"a b;c\" \" ;\"/,", "3");
    assert_output("\"a b\" S/,", "2");
    assert_output("\"abc\" \"\"/,", "1");
    assert_output("\",,\" \",\"/,", "0");
}

#[test]
fn comparisons() {
    assert_output("3 3=", "1");
    assert_output("3 3.0=", "1");
    assert_output("65 \"A\"c=", "1");
    assert_output("\"a\" \"a\"=", "1");
    assert_output("2 \"2\"=", "1");
    assert_output("2.5 \"2.5kg\"=", "1");
    assert_output("3 \" 3\"=", "1");
    assert_output("\"2\" \"2.0\"=", "0");
    assert_output("2 [2]=", "0");
    assert_output("[1 2] [1 2]=", "1");
    assert_output("[1 2] [1 3]=", "0");
    assert_output("1 2<", "1");
    assert_output("2 1<", "0");
    assert_output("2 1>", "1");
    assert_output("\"abc\" \"abd\"<", "1");
    assert_output("\"b\" \"abc\">", "1");
}

#[test]
fn array_commands_take_precedence_over_comparisons() {
    assert_output("[5 6] 1=", "6");
    assert_output("\"abc\" 2<", "ab");
}

#[test]
fn selection() {
    assert_output("1 \"yes\" \"no\"?", "yes");
    assert_output("0 \"yes\" \"no\"?", "no");
    assert_output("\"\" 1 2?", "2");
    assert_output("[0] 1 2?", "1");
    assert_output("\"0\" 1 2?", "1");
    assert_output("{x} 1 2?", "2");
}

#[test]
fn extended_logic() {
    assert_output("1 5e&", "5");
    assert_output("0 5e&", "0");
    assert_output("0 5e|", "5");
    assert_output("3 5e|", "3");
    assert_output("0 0e|", "0");
    assert_output("\"0\" 5e&", "0");
    assert_output("\"7up\" 5e&", "5");
    assert_output("[1] 5e|", "5");
    assert_output("{x} 0e|", "0");
    assert_output("3 5e<", "3");
    assert_output("3 5e>", "5");
    assert_output("\"b\" \"a\"e<", "a");
    assert_output("1 1.0e< 2/", "0.5");
}

#[test]
fn input_commands() {
    assert_eq!(run_with_input("l l", "one\ntwo\n"), ("onetwo".to_string(), String::new()));
    assert_eq!(run_with_input("l,", ""), ("0".to_string(), String::new()));
    assert_eq!(run_with_input("t", "a\nb"), ("a\nb".to_string(), String::new()));
    assert_eq!(run_with_input("l t", "x\ny\nz\n"), ("xy\nz\n".to_string(), String::new()));
    assert_eq!(run_with_input("t \",\"/,", "a,b\nc\n"), ("3".to_string(), String::new()));
}

#[test]
fn printing_keeps_the_top() {
    assert_eq!(run_with_input("\"hi\"p", ""), ("hi".to_string(), "hi".to_string()));
    assert_eq!(run_with_input("1 2+p 3", ""), ("33".to_string(), "3".to_string()));
    assert_eq!(run_with_input("p", ""), (String::new(), String::new()));
    assert_eq!(run_with_input("l p; l p;", "a\nb\n"), (String::new(), "ab".to_string()));
}

#[test]
fn deeply_nested_arrays() {
    let depth = 1_000;
    let src = format!("{}7{}", "[".repeat(depth), "]".repeat(depth));
    assert_output(&src, "7");
}
