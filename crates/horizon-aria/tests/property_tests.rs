//! Invariants that hold across many configurations.

use std::sync::Arc;

use horizon_aria::navigation::{self, next_index, resolve_direction};
use horizon_aria::prelude::*;

fn options(disabled: &[usize], count: usize) -> Vec<OptionItem<usize>> {
    (0..count)
        .map(|i| OptionItem::new(format!("opt-{i}"), i).with_disabled(disabled.contains(&i)))
        .collect()
}

/// Disabled-index layouts exercised by the navigation properties.
fn layouts() -> Vec<Vec<usize>> {
    vec![
        vec![],
        vec![0],
        vec![5],
        vec![0, 5],
        vec![1, 2],
        vec![0, 1, 2, 3, 4],
        vec![1, 3, 5],
    ]
}

#[test]
fn test_settle_is_identity_within_bounds() {
    let value = Arc::new(Property::new(0.0));
    for wrap in [false, true] {
        let model = ValueModel::new(LinkedProperty::from_property(value.clone()))
            .with_min(Some(-10.0))
            .with_max(Some(10.0))
            .with_wrap(wrap);
        let mut v = -10.0;
        while v <= 10.0 {
            assert_eq!(model.settle(v), v);
            v += 0.5;
        }
    }
}

#[test]
fn test_increment_then_decrement_round_trips() {
    let value = Arc::new(Property::new(0.0));
    let model = ValueModel::new(LinkedProperty::from_property(value.clone()))
        .with_min(Some(0.0))
        .with_max(Some(10.0));

    for start in 1..10 {
        value.set(start as f64);
        model.increment();
        model.decrement();
        assert_eq!(value.get(), start as f64);
    }

    // Hitting the bound loses the step.
    value.set(10.0);
    model.increment();
    model.decrement();
    assert_eq!(value.get(), 9.0);
}

#[test]
fn test_wrap_both_boundaries() {
    let value = Arc::new(Property::new(0.0));
    let model = ValueModel::new(LinkedProperty::from_property(value.clone()))
        .with_min(Some(0.0))
        .with_max(Some(59.0))
        .with_wrap(true);

    model.decrement();
    assert_eq!(value.get(), 59.0);
    model.increment();
    assert_eq!(value.get(), 0.0);
}

#[test]
fn test_roving_has_exactly_one_tab_stop() {
    for disabled in layouts() {
        let items = Accessor::constant(options(&disabled, 6));
        let value = Arc::new(Property::new(None));
        let mut group = RadioGroupPattern::new(items, value, ContainerConfig::default());
        group.on_focus_in();

        for key in [Key::ArrowDown, Key::ArrowDown, Key::End, Key::ArrowUp, Key::Home] {
            group.on_keydown(&mut KeyPressEvent::key(key)).unwrap();
            let stops = (0..6).filter(|&i| group.item_tabindex(i) == Some(0)).count();
            assert_eq!(stops, 1, "layout {disabled:?} after {key:?}");
            assert_eq!(group.container_attributes().get("tabindex"), Some("-1"));
        }
    }
}

#[test]
fn test_navigation_never_lands_on_disabled() {
    for disabled in layouts() {
        let items = options(&disabled, 6);
        let any_enabled = items.iter().any(|item| !item.is_disabled());
        for wrap in [false, true] {
            let policy = NavigationPolicy {
                wrap,
                ..NavigationPolicy::default()
            };
            for start in 0..6 {
                for direction in [Direction::Next, Direction::Previous, Direction::First, Direction::Last] {
                    let result = next_index(&items, Some(start), direction, &policy);
                    if any_enabled {
                        let index = result.unwrap();
                        assert!(
                            !items[index].is_disabled(),
                            "layout {disabled:?} start {start} {direction:?} wrap {wrap}"
                        );
                    } else {
                        assert_eq!(result, Some(start));
                    }
                }
            }
        }
    }
}

#[test]
fn test_rtl_mirrors_ltr() {
    let items = options(&[], 5);
    let ltr = NavigationPolicy {
        orientation: Orientation::Horizontal,
        ..NavigationPolicy::default()
    };
    let rtl = NavigationPolicy {
        text_direction: TextDirection::Rtl,
        ..ltr
    };

    for start in 0..5 {
        let forward_ltr = ltr.resolve(Key::ArrowRight).unwrap();
        let forward_rtl = rtl.resolve(Key::ArrowLeft).unwrap();
        assert_eq!(
            next_index(&items, Some(start), forward_ltr, &ltr),
            next_index(&items, Some(start), forward_rtl, &rtl)
        );
    }
    assert_eq!(
        resolve_direction(Key::ArrowLeft, Orientation::Horizontal, TextDirection::Rtl),
        Some(Direction::Next)
    );
}

#[test]
fn test_pointer_ignores_skip_disabled() {
    assert_eq!(navigation::pointer_target(4, 2, false), Some(2));
    assert_eq!(navigation::pointer_target(4, 2, true), None);
}

#[test]
fn test_single_select_never_holds_two() {
    let items = options(&[], 4);
    let value = Arc::new(Property::new(Vec::new()));
    let mut selection = SelectionModel::new(LinkedProperty::from_property(value.clone()));

    for index in [0, 3, 1, 1, 2] {
        selection.trigger(&items, index);
        assert_eq!(value.get().len(), 1);
    }
    assert!(!selection.trigger_range(&items, 0, 3, true));
    assert_eq!(value.get(), vec![2]);
}
