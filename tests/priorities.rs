use pipeorder::priority::{DEFAULT_START_PRIORITY, assign};

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("stage{i:02}")).collect()
}

#[test]
fn single_stage_gets_the_full_start_priority() {
    let assigned = assign(&names(1), DEFAULT_START_PRIORITY);
    assert_eq!(assigned.len(), 1);
    assert_eq!(assigned[0].1, 1000);
}

#[test]
fn three_stages_span_1000_500_0() {
    let values: Vec<i64> = assign(&names(3), 1000).iter().map(|(_, p)| *p).collect();
    assert_eq!(values, vec![1000, 500, 0]);
}

#[test]
fn uneven_division_truncates_toward_zero() {
    // step = 1000 / 3 = 333.33..; accumulator truncated at each emission.
    let values: Vec<i64> = assign(&names(4), 1000).iter().map(|(_, p)| *p).collect();
    assert_eq!(values, vec![1000, 666, 333, 0]);
}

#[test]
fn seven_stages_follow_the_running_accumulator() {
    // step = 1000 / 6 = 166.66..
    let values: Vec<i64> = assign(&names(7), 1000).iter().map(|(_, p)| *p).collect();
    assert_eq!(values, vec![1000, 833, 666, 500, 333, 166, 0]);
}

#[test]
fn sequence_starts_exact_never_increases_never_goes_negative() {
    for n in 1..=60 {
        let values: Vec<i64> = assign(&names(n), 1000).iter().map(|(_, p)| *p).collect();

        assert_eq!(values.len(), n);
        assert_eq!(values[0], 1000, "first priority must be exactly the start");

        for pair in values.windows(2) {
            assert!(pair[1] <= pair[0], "priorities must be non-increasing");
        }
        assert!(*values.last().unwrap() >= 0, "priorities must stay >= 0");
    }
}

#[test]
fn custom_start_priority_is_honored() {
    let values: Vec<i64> = assign(&names(3), 100).iter().map(|(_, p)| *p).collect();
    assert_eq!(values, vec![100, 50, 0]);
}

#[test]
fn empty_order_yields_no_assignments() {
    assert!(assign(&[], 1000).is_empty());
}

#[test]
fn assignments_keep_the_order_of_the_input() {
    let order = vec!["z".to_string(), "y".to_string(), "x".to_string()];
    let assigned = assign(&order, 1000);
    let assigned_names: Vec<&str> = assigned.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(assigned_names, vec!["z", "y", "x"]);
}
