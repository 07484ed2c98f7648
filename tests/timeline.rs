use bizdash_gantt::io::{JsonFileStore, TaskStore};
use bizdash_gantt::model::{
    days_between, derive_range, is_today, is_weekend, position_for, Position, Selection, Task, TaskBoard,
    TaskStatus, VisibleWindow, DEFAULT_CELL_WIDTH,
};
use chrono::{Duration, NaiveDate};
use uuid::Uuid;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn project() -> Vec<Task> {
    vec![
        Task::new("Client onboarding", d(2024, 9, 2), d(2024, 9, 4)).with_status(TaskStatus::Completed),
        Task::new("Site survey", d(2024, 9, 5), d(2024, 9, 12)).with_status(TaskStatus::InProgress),
        Task::new("Design review", d(2024, 8, 28), d(2024, 9, 3)).with_status(TaskStatus::Review),
        Task::new("Procurement", d(2024, 9, 10), d(2024, 9, 30)).with_status(TaskStatus::AtRisk),
    ]
}

#[test]
fn range_and_grid_cover_every_task() {
    let tasks = project();
    let (earliest, latest) = derive_range(&tasks).unwrap();
    assert!(earliest <= latest);
    assert_eq!(earliest, tasks.iter().map(|t| t.start().unwrap()).min().unwrap());
    assert_eq!(latest, tasks.iter().map(|t| t.end().unwrap()).max().unwrap());

    let window = VisibleWindow::for_tasks(&tasks, (d(2000, 1, 1), d(2000, 1, 1)), DEFAULT_CELL_WIDTH);
    let days = window.days();
    assert_eq!(days.len() as i64, days_between(earliest, latest) + 1);
    assert!(days.windows(2).all(|w| w[1] == w[0] + Duration::days(1)));

    // Every task fits within the grid.
    for task in &tasks {
        let pos = window.position(task);
        assert!(pos.left >= 0.0, "{} starts before the grid", task.name);
        assert!(pos.right() <= window.grid_width(), "{} overflows the grid", task.name);
    }
}

#[test]
fn empty_board_falls_back() {
    let window = VisibleWindow::for_tasks(&[], (d(2024, 1, 1), d(2024, 1, 7)), 60.0);
    assert_eq!((window.start, window.end), (d(2024, 1, 1), d(2024, 1, 7)));
    assert_eq!(window.days().len(), 7);
}

#[test]
fn documented_positions() {
    let reference = d(2024, 9, 1);
    let cases = [
        (reference, reference, Position { left: 0.0, width: 60.0 }),
        (reference, d(2024, 9, 5), Position { left: 0.0, width: 300.0 }),
        (d(2024, 8, 30), d(2024, 8, 31), Position { left: -120.0, width: 120.0 }),
    ];
    for (start, end, expected) in cases {
        let task = Task::new("case", start, end);
        assert_eq!(position_for(&task, reference, 60.0), expected);
    }
}

#[test]
fn weekend_convention() {
    assert!(is_weekend(d(2024, 9, 6))); // Friday
    assert!(is_weekend(d(2024, 9, 7))); // Saturday
    assert!(!is_weekend(d(2024, 9, 8))); // Sunday
}

#[test]
fn today_against_wall_clock() {
    let today = chrono::Local::now().date_naive();
    assert!(is_today(today));
    assert!(!is_today(today - Duration::days(1)));
    assert!(!is_today(today + Duration::days(1)));
}

#[test]
fn reschedule_round_trip_through_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    bizdash_gantt::io::save_tasks(&project(), &path).unwrap();

    let mut store = JsonFileStore::new(&path);
    let mut board = TaskBoard::new(store.load().unwrap());
    let window = VisibleWindow::new(d(2024, 9, 1), d(2024, 9, 30), 60.0);
    let mut selection = Selection::default();

    let id = board.tasks[1].id;
    selection.select(id);
    selection.open_editor();
    assert!(selection.is_editing());

    let unknown = board.clone();
    assert!(!board.set_task_dates(Uuid::new_v4(), d(2024, 9, 1), d(2024, 9, 2)));
    assert_eq!(board, unknown);

    assert!(board.set_task_dates(id, d(2024, 9, 8), d(2024, 9, 9)));
    store.persist_dates(id, d(2024, 9, 8), d(2024, 9, 9)).unwrap();
    selection.close();
    assert_eq!(selection, Selection::Selected(id));

    let pos = window.position(board.get(id).unwrap());
    assert_eq!(pos, Position { left: 420.0, width: 120.0 });

    let reloaded = TaskBoard::new(store.load().unwrap());
    assert_eq!(reloaded, board);
}
