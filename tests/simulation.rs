use std::fs;
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::tempdir;

use torus_life::config::Layout;
use torus_life::config::Palette;
use torus_life::controller::Controller;
use torus_life::controller::RunState;
use torus_life::events::Event;
use torus_life::frame::Frame;
use torus_life::grid::Grid;
use torus_life::next_generation;
use torus_life::render::Renderer;
use torus_life::snapshot::SnapshotDir;

const CELL: u32 = 20;

fn setup(root: &Path, seed: u64) -> (Controller, Frame) {
    let layout = Layout::default();
    let grid = Grid::random(
        layout.rows(),
        layout.cols(),
        &mut StdRng::seed_from_u64(seed),
    );

    let ctl = Controller::new(grid, SnapshotDir::new(root.join("image_save")));
    let frame = Frame::new(layout, Palette::default());

    (ctl, frame)
}

fn snapshot_names(root: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(root.join("image_save"))
        .map(|dir| {
            dir.map(|entry| entry.unwrap().file_name().into_string().unwrap())
                .collect()
        })
        .unwrap_or_default();

    names.sort();
    names
}

/// Reads the cell states back out of a saved frame, sampling the middle of every cell
fn decode_cells(path: &Path, rows: usize, cols: usize) -> Grid {
    let img = image::open(path).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (800, 600));

    let mut grid = Grid::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            let px = img.get_pixel(col as u32 * CELL + CELL / 2, row as u32 * CELL + CELL / 2);
            grid.set(row, col, px.0 == [255, 255, 255]);
        }
    }

    grid
}

#[test]
fn paused_ticks_do_nothing() {
    let tmp = tempdir().unwrap();
    let (mut ctl, mut frame) = setup(tmp.path(), 1);
    let start = ctl.grid().clone();

    assert_eq!(ctl.state(), RunState::Paused);

    for _ in 0..5 {
        let report = ctl.tick(&mut frame).unwrap();
        assert!(!report.advanced);
    }

    assert_eq!(ctl.grid(), &start);
    assert_eq!(ctl.generation(), 0);
}

#[test]
fn run_then_tick_advances_once() {
    let tmp = tempdir().unwrap();
    let (mut ctl, mut frame) = setup(tmp.path(), 2);
    let start = ctl.grid().clone();

    assert!(ctl.handle(Event::TogglePause).is_continue());
    ctl.tick(&mut frame).unwrap();

    assert_eq!(ctl.grid(), &next_generation(&start));
    assert_eq!(ctl.generation(), 1);
}

#[test]
fn capture_saves_the_grid_on_screen() {
    let tmp = tempdir().unwrap();
    let (mut ctl, mut frame) = setup(tmp.path(), 3);

    ctl.handle(Event::TogglePause);
    for _ in 0..3 {
        ctl.tick(&mut frame).unwrap();
    }
    let shown = ctl.grid().clone();

    ctl.handle(Event::StepAndCapture);
    assert_eq!(ctl.state(), RunState::Paused);

    let report = ctl.tick(&mut frame).unwrap();
    let path = report.snapshot.expect("a snapshot was requested").unwrap();

    assert_eq!(snapshot_names(tmp.path()), vec!["image_1.png"]);
    assert_eq!(path, tmp.path().join("image_save").join("image_1.png"));
    assert_eq!(decode_cells(&path, shown.rows(), shown.cols()), shown);

    // still paused, nothing moved
    assert_eq!(ctl.grid(), &shown);
    ctl.tick(&mut frame).unwrap();
    assert_eq!(snapshot_names(tmp.path()).len(), 1);
}

#[test]
fn capture_while_paused_writes_nothing() {
    let tmp = tempdir().unwrap();
    let (mut ctl, mut frame) = setup(tmp.path(), 4);

    ctl.handle(Event::StepAndCapture);
    ctl.tick(&mut frame).unwrap();

    assert_eq!(ctl.state(), RunState::Paused);
    assert!(snapshot_names(tmp.path()).is_empty());
}

#[test]
fn captures_continue_the_sequence_on_disk() {
    let tmp = tempdir().unwrap();
    let dir = tmp.path().join("image_save");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("image_1.png"), b"").unwrap();
    fs::write(dir.join("image_3.png"), b"").unwrap();
    fs::write(dir.join("image_abc.png"), b"").unwrap();

    let (mut ctl, mut frame) = setup(tmp.path(), 5);

    for expected in ["image_4.png", "image_5.png"] {
        ctl.handle(Event::TogglePause);
        ctl.handle(Event::StepAndCapture);

        let path = ctl.tick(&mut frame).unwrap().snapshot.unwrap().unwrap();
        assert_eq!(path, dir.join(expected));
    }

    assert_eq!(
        snapshot_names(tmp.path()),
        vec![
            "image_1.png",
            "image_3.png",
            "image_4.png",
            "image_5.png",
            "image_abc.png"
        ]
    );
}

#[test]
fn frame_png_round_trips_through_the_renderer() {
    let tmp = tempdir().unwrap();
    let mut frame = Frame::new(Layout::default(), Palette::default());
    let mut grid = Grid::new(30, 40);
    grid.set(0, 0, true);
    grid.set(29, 39, true);

    frame.draw(&grid).unwrap();
    let path = tmp.path().join("frame.png");
    frame.save_png(&path).unwrap();

    assert_eq!(decode_cells(&path, 30, 40), grid);
}
