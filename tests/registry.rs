// tests/registry.rs
use glam::IVec2;
use grid_robots::{Direction, Grid, RobotRegistry};

fn registry() -> RobotRegistry {
    RobotRegistry::new(Grid::default())
}

#[test]
fn test_every_in_bounds_placement_reports_itself() {
    for x in 0..5 {
        for y in 0..5 {
            for direction in Direction::ALL {
                let mut reg = registry();
                assert!(reg.place(x, y, direction));
                let robot = reg.active().expect("first robot becomes active");
                assert_eq!(robot.report(), format!("{x},{y},{direction}"));
            }
        }
    }
}

#[test]
fn test_out_of_bounds_placement_is_ignored() {
    let mut reg = registry();
    for (x, y) in [(-1, 0), (0, -1), (5, 0), (0, 5), (7, 7)] {
        assert!(!reg.place(x, y, Direction::North), "({x},{y}) is off the grid");
    }
    assert!(reg.is_empty());
    assert!(reg.report_all().is_none());

    reg.place(1, 1, Direction::North);
    reg.place(5, 1, Direction::North);
    assert_eq!(reg.len(), 1, "Count unchanged by a rejected placement");
}

#[test]
fn test_only_first_robot_becomes_active() {
    let mut reg = registry();
    reg.place(0, 0, Direction::North);
    reg.place(1, 1, Direction::East);
    reg.place(2, 2, Direction::South);

    assert_eq!(reg.active_index(), Some(0));
    let names: Vec<_> = reg.robots().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Robot 1", "Robot 2", "Robot 3"]);
}

#[test]
fn test_rotation_has_period_four() {
    for start in Direction::ALL {
        let mut reg = registry();
        reg.place(2, 2, start);

        reg.rotate_left();
        reg.rotate_right();
        assert_eq!(reg.active().unwrap().direction, start);

        reg.rotate_right();
        reg.rotate_left();
        assert_eq!(reg.active().unwrap().direction, start);

        for _ in 0..4 {
            reg.rotate_left();
        }
        assert_eq!(reg.active().unwrap().direction, start);

        for _ in 0..4 {
            reg.rotate_right();
        }
        assert_eq!(reg.active().unwrap().direction, start);
    }
}

#[test]
fn test_right_turns_follow_compass_order() {
    let mut reg = registry();
    reg.place(0, 0, Direction::North);

    let mut seen = Vec::new();
    for _ in 0..4 {
        reg.rotate_right();
        seen.push(reg.active().unwrap().direction);
    }
    assert_eq!(
        seen,
        [
            Direction::East,
            Direction::South,
            Direction::West,
            Direction::North
        ]
    );
}

#[test]
fn test_move_saturates_at_edges() {
    let cases = [
        (0, 2, Direction::West, IVec2::new(0, 2)),
        (4, 2, Direction::East, IVec2::new(4, 2)),
        (2, 4, Direction::North, IVec2::new(2, 4)),
        (2, 0, Direction::South, IVec2::new(2, 0)),
        (2, 2, Direction::North, IVec2::new(2, 3)),
        (2, 2, Direction::East, IVec2::new(3, 2)),
        (2, 2, Direction::South, IVec2::new(2, 1)),
        (2, 2, Direction::West, IVec2::new(1, 2)),
    ];

    for (x, y, direction, expected) in cases {
        let mut reg = registry();
        reg.place(x, y, direction);
        reg.move_active();
        assert_eq!(
            reg.active().unwrap().position,
            expected,
            "MOVE from ({x},{y}) facing {direction}"
        );
    }
}

#[test]
fn test_set_active_range() {
    let mut reg = registry();
    reg.place(0, 0, Direction::North);
    reg.place(3, 3, Direction::West);

    for bad in [0, -1, 3, i64::MAX] {
        reg.set_active(bad);
        assert_eq!(reg.active_index(), Some(0), "ROBOT {bad} is out of range");
    }

    reg.set_active(2);
    let report = reg.report_all().unwrap();
    assert_eq!(report.summary, "No of robots: 2, Active robot: Robot 2");
}

#[test]
fn test_operations_on_empty_registry_are_noops() {
    let mut reg = registry();
    reg.rotate_left();
    reg.rotate_right();
    reg.move_active();
    reg.set_active(1);

    assert!(reg.is_empty());
    assert_eq!(reg.active_index(), None);
}

#[test]
fn test_occupancy_is_not_enforced() {
    let mut reg = registry();
    reg.grid_mut().occupy(1, 1);
    assert!(reg.grid().is_occupied(1, 1));

    assert!(reg.place(1, 1, Direction::North), "Occupied cells still accept robots");
    assert!(reg.place(1, 0, Direction::North));
    reg.set_active(2);
    reg.move_active();

    let positions: Vec<_> = reg.robots().iter().map(|r| r.position).collect();
    assert_eq!(positions, [IVec2::new(1, 1), IVec2::new(1, 1)]);
}
