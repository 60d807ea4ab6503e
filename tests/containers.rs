use golfstack::interpreter::{
    stack::Stack,
    value::{
        core::{TypeMask, Value},
        list::{LIST_GROWTH_STEP, LIST_INITIAL_CAPACITY, List},
    },
    variables::{VariableName, Variables},
};
use pretty_assertions::assert_eq;

fn ints(values: &[i64]) -> List {
    values.iter().copied().map(Value::Integer).collect()
}

#[test]
fn list_grows_by_the_requested_room_plus_the_step() {
    let mut list = List::new();
    assert_eq!(list.capacity(), LIST_INITIAL_CAPACITY);

    for i in 0..26 {
        list.push(Value::Integer(i));
    }
    assert_eq!(list.len(), 26);
    assert_eq!(list.capacity(), LIST_INITIAL_CAPACITY + 1 + LIST_GROWTH_STEP);

    list.grow(4);
    assert_eq!(list.capacity(), LIST_INITIAL_CAPACITY + 1 + LIST_GROWTH_STEP + 4);
}

#[test]
fn list_shifts_open_and_close_gaps() {
    let mut list = ints(&[1, 2, 3, 4]);

    list.shift_right(0, 1);
    assert_eq!(list.len(), 5);
    assert_eq!(list.get(0), None);
    assert_eq!(list.to_string(), "_1234");

    list.shift_left(0, 1);
    assert_eq!(list, ints(&[1, 2, 3, 4]));

    list.shift_left(2, 10);
    assert_eq!(list, ints(&[1, 2]));
    assert_eq!(list.slots().count(), 2);
}

#[test]
fn list_removal_reports_missing_indices() {
    let mut list = ints(&[7, 8, 9]);
    assert_eq!(list.remove(5), None);
    assert_eq!(list.remove(0), Some(Value::Integer(7)));
    assert_eq!(list.pop(), Some(Value::Integer(9)));
    assert_eq!(list.pop(), Some(Value::Integer(8)));
    assert_eq!(list.pop(), None);
    assert!(list.is_empty());
}

#[test]
fn list_copies_are_deep() {
    let inner = ints(&[1, 2]);
    let mut outer: List = [Value::List(inner)].into_iter().collect();
    let mut copy = outer.clone();

    if let Some(Value::List(mut nested)) = copy.remove(0) {
        nested.push(Value::Integer(3));
        copy.push(Value::List(nested));
    }

    assert_eq!(outer.to_string(), "12");
    assert_eq!(copy.to_string(), "123");

    outer.extend_copied(&copy);
    assert_eq!(outer.len(), 2);
    assert_eq!(copy.len(), 1);
}

#[test]
fn list_append_insert_and_reverse() {
    let mut list = ints(&[1, 2]);
    list.append(ints(&[3, 4]));
    list.insert(0, Value::Integer(0));
    assert_eq!(list.to_string(), "01234");

    assert_eq!(list.reverse().to_string(), "43210");
}

#[test]
fn list_slices_and_repetition() {
    let list = ints(&[1, 2, 3]);
    assert_eq!(list.first_n(2), ints(&[1, 2]));
    assert_eq!(list.last_n(2), ints(&[2, 3]));
    assert_eq!(list.last_n(9), list);
    assert_eq!(list.repeat(2).map(|r| r.len()), Some(6));
    assert!(List::new().repeat(usize::MAX).is_some_and(|r| r.is_empty()));
    assert_eq!(list.repeat(usize::MAX), None);
    assert!(List::try_with_capacity(usize::MAX).is_none());
}

#[test]
fn list_equality_tolerates_numeric_types() {
    let ints = ints(&[1, 2]);
    let floats: List = [Value::Float(1.0), Value::Float(2.0)].into_iter().collect();
    assert!(ints.equals(&floats));
    assert!(!ints.equals(&List::range(3).unwrap()));
}

#[test]
fn value_readings() {
    assert_eq!(Value::from("-12abc").to_integer(), -12);
    assert_eq!(Value::from("abc").to_float(), 1.0);
    assert_eq!(Value::from("x=9").to_integer(), 1);
    assert_eq!(Value::from("\t12").to_integer(), 12);
    assert_eq!(Value::from("").to_character(), 0);
    assert_eq!(Value::from(vec![Value::Integer(1)]).to_character(), b' ');
    assert_eq!(Value::Integer(321).to_character(), 65);
    assert_eq!(Value::Float(1e300).to_integer(), i64::MAX);
    assert_eq!(Value::from("99999999999999999999").to_integer(), i64::MAX);
}

#[test]
fn value_to_list() {
    assert_eq!(Value::from("ab").to_list(), List::from_text(b"ab"));
    assert_eq!(Value::Integer(4).to_list(), ints(&[4]));
    assert_eq!(Value::from(vec![Value::Integer(4)]).into_list(), ints(&[4]));
}

#[test]
fn in_place_conversions_only_take_numbers_and_text() {
    let mut text = Value::from("2.75");
    assert!(text.convert_to_float());
    assert_eq!(text, Value::Float(2.75));

    assert!(text.convert_to_character());
    assert_eq!(text, Value::Character(2));

    let mut list = Value::from(vec![Value::Integer(1)]);
    assert!(!list.convert_to_float());
    assert!(list.is_type(TypeMask::LIST));
}

#[test]
fn texts_equal_numbers_by_their_reading() {
    assert!(Value::from("2").equals(&Value::Integer(2)));
    assert!(Value::Character(b'A').equals(&Value::from("65")));
    assert!(!Value::from("2").equals(&Value::from("2.0")));
    assert!(!Value::Block("2".into()).equals(&Value::Integer(2)));
    assert!(!Value::from("").is_truthy());
    assert!(Value::from("0").is_truthy());
    assert!(!Value::Block("x".into()).is_truthy());
}

#[test]
fn type_masks() {
    assert!(Value::Character(b'a').is_type(TypeMask::NUMERIC));
    assert!(Value::Character(b'a').is_type(TypeMask::TEXTUAL));
    assert!(!Value::Float(1.0).is_type(TypeMask::WHOLE));
    assert!(Value::from("a").is_type(TypeMask::ARRAY));
    assert!(!Value::Block(String::new()).is_type(TypeMask::ARRAY | TypeMask::NUMERIC_OR_TEXT));
}

#[test]
fn rendering() {
    assert_eq!(Value::Float(0.1).to_string(), "0.1");
    assert_eq!(Value::Float(-2.0).to_string(), "-2");
    assert_eq!(Value::Float(f64::NAN).to_string(), "nan");
    assert_eq!(Value::Character(b'z').to_string(), "z");
    let nested = Value::from(vec![Value::from(vec![Value::from("a"), Value::Integer(1)]),
                                  Value::Block("x".into())]);
    assert_eq!(nested.to_string(), "a1{x}");
}

#[test]
fn stack_views_and_shuffles() {
    let mut stack = Stack::new();
    assert_eq!(stack.top::<1>(), None);

    for i in 1..=3 {
        stack.push(Value::Integer(i));
    }
    assert_eq!(stack.top::<2>(), Some(&[Value::Integer(2), Value::Integer(3)]));

    assert!(stack.swap_top());
    assert_eq!(stack.to_string(), "132");
    assert!(stack.rotate_top());
    assert_eq!(stack.to_string(), "321");
    assert_eq!(stack.render_spaced(), "3 2 1");

    assert_eq!(stack.copy_nth(2), Some(Value::Integer(3)));
    assert_eq!(stack.peek_nth(3), None);
    assert_eq!(stack.iter().count(), 3);
    assert_eq!(stack.into_list(), ints(&[3, 2, 1]));
}

#[test]
fn stack_shuffles_need_enough_values() {
    let mut stack = Stack::new();
    stack.push(Value::from("only"));
    assert!(!stack.swap_top());
    assert!(!stack.rotate_top());
    assert_eq!(stack.pop_n::<2>(), None);
    assert_eq!(stack.pop(), Some(Value::from("only")));
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.peek(), None);
}

#[test]
fn variables_are_seeded() {
    let variables = Variables::new();
    let value = |letter: char| variables.get(VariableName::try_from(letter).unwrap()).clone();

    assert_eq!(value('A'), Value::Integer(10));
    assert_eq!(value('F'), Value::Integer(15));
    assert_eq!(value('G'), Value::Integer(0));
    assert_eq!(value('N'), Value::Character(b'\n'));
    assert_eq!(value('S'), Value::Character(b' '));
    assert_eq!(value('X'), Value::Integer(0));
    assert_eq!(value('Y'), Value::Integer(1));
    assert_eq!(value('Z'), Value::Integer(2));
}

#[test]
fn variable_names_are_uppercase_letters() {
    assert_eq!(VariableName::try_from('a'), Err('a'));
    assert_eq!(VariableName::try_from(':'), Err(':'));
    assert_eq!(VariableName::try_from('M').map(VariableName::letter), Ok('M'));

    let mut variables = Variables::new();
    let m = VariableName::try_from('M').unwrap();
    assert_eq!(variables.set(m, Value::Float(0.5)), Value::Integer(0));
    assert_eq!(variables.get(m), &Value::Float(0.5));
}
