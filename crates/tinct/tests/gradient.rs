use tinct::gradient::{HslGradient, OklchGradient, RgbGradient};
use tinct::{Color, ColorSpace, Direction, Error, Gradient, Rgb, Stop, StopInput};

const RED: Rgb = Rgb::new(255, 0, 0);
const BLUE: Rgb = Rgb::new(0, 0, 255);

fn positions<C: ColorSpace>(gradient: &Gradient<C>) -> Vec<f64> {
    gradient.stops().iter().map(Stop::position).collect()
}

#[test]
fn test_red_to_blue_to_right() {
    let gradient = RgbGradient::build(["red", "blue"], Direction::parse("to right").unwrap()).unwrap();
    let bitmap = gradient.rasterize(3, 1).unwrap();

    assert_eq!(bitmap.get(0, 0), Some(&RED));
    assert_eq!(bitmap.get(1, 0), Some(&RED.blend(&BLUE, 0.5)));
    assert_eq!(bitmap.get(2, 0), Some(&BLUE));
}

#[test]
fn test_auto_balance_examples() {
    let four = RgbGradient::build(["red", "green", "blue", "white"], Direction::default()).unwrap();
    assert_eq!(positions(&four), vec![0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0]);

    let anchored = RgbGradient::build(
        [
            StopInput::at("red", 0.0),
            StopInput::auto("green"),
            StopInput::auto("blue"),
            StopInput::at("white", 1.0),
        ],
        Direction::default(),
    )
    .unwrap();
    assert_eq!(positions(&anchored), positions(&four));

    let split = RgbGradient::build(
        [
            StopInput::at("red", 0.0),
            StopInput::auto("green"),
            StopInput::at("blue", 0.5),
            StopInput::auto("white"),
            StopInput::at("black", 1.0),
        ],
        Direction::default(),
    )
    .unwrap();
    assert_eq!(positions(&split), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn test_mixed_inputs_convert_into_gradient_space() {
    let gradient = HslGradient::build(
        vec![
            StopInput::from("#ff0000"),
            StopInput::from(Color::Oklch(BLUE.to_oklch())),
            StopInput::from((Rgb::WHITE, 1.0)),
        ],
        Direction::default(),
    )
    .unwrap();
    let stops = gradient.stops();
    assert_eq!(stops[0].color().to_rgb(), RED);
    assert_eq!(stops[1].color().to_rgb(), BLUE);
    assert_eq!(stops[1].position(), 0.5);
    assert_eq!(stops[2].color().l.value(), 100.0);
}

#[test]
fn test_color_space_changes_the_midpoint() {
    let to_right = Direction::parse("to right").unwrap();
    let rgb = RgbGradient::build(["red", "blue"], to_right).unwrap().sample(0.5);
    let hsl = HslGradient::build(["red", "blue"], to_right).unwrap().sample(0.5);
    let oklch = OklchGradient::build(["red", "blue"], to_right).unwrap().sample(0.5);

    assert_eq!(rgb, Rgb::new(128, 0, 128));
    // HSL keeps full saturation through magenta.
    assert_eq!(hsl.to_rgb(), Rgb::new(255, 0, 255));
    assert_ne!(oklch.to_rgb(), rgb);
}

#[test]
fn test_dynamic_color_gradient_blends_in_first_stop_space() {
    let gradient: Gradient<Color> = Gradient::build(
        [Color::parse("hsl(0, 100%, 50%)").unwrap(), Color::Rgb(BLUE)],
        Direction::default(),
    )
    .unwrap();
    assert!(matches!(gradient.sample(0.5), Color::Hsl(_)));
    assert_eq!(gradient.sample(1.0), Color::Rgb(BLUE));
}

#[test]
fn test_rows_render_independently() {
    let gradient = RgbGradient::build(["red", "blue"], Direction::parse("to bottom right").unwrap()).unwrap();
    let bitmap = gradient.rasterize(5, 4).unwrap();

    let rows: Vec<Vec<Rgb>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|y| {
                let gradient = &gradient;
                scope.spawn(move || gradient.render_row(y, 5, 4).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (y, row) in rows.iter().enumerate() {
        assert_eq!(bitmap.rows().nth(y).unwrap(), row.as_slice());
    }
}

#[test]
fn test_diagonal_corners_hit_end_stops() {
    let gradient = RgbGradient::build(["red", "blue"], Direction::parse("to bottom right").unwrap()).unwrap();
    let bitmap = gradient.rasterize(10, 10).unwrap();
    assert_eq!(bitmap.get(0, 0), Some(&RED));
    assert_eq!(bitmap.get(9, 9), Some(&BLUE));
}

#[test]
fn test_bitmap_maps_into_another_space() {
    let gradient = OklchGradient::build(["black", "white"], Direction::default()).unwrap();
    let bitmap = gradient.rasterize(1, 5).unwrap().map(|c| c.to_rgb());
    let lightness: Vec<u8> = bitmap.pixels().iter().map(|c| c.r.value()).collect();
    assert!(lightness.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(bitmap.get(0, 0), Some(&Rgb::BLACK));
    assert_eq!(bitmap.get(0, 4), Some(&Rgb::WHITE));
}

#[test]
fn test_errors_surface_from_build_and_rasterize() {
    let empty: [&str; 0] = [];
    assert_eq!(
        RgbGradient::build(empty, Direction::default()),
        Err(Error::EmptyGradient)
    );
    assert_eq!(
        Stop::<Rgb>::parse("not-a-color", 0.5),
        Err(Error::InvalidStopColor("not-a-color".to_string()))
    );
    assert_eq!(Stop::new(RED, 1.1), Err(Error::InvalidStopPosition(1.1)));

    let gradient = RgbGradient::build(["red"], Direction::default()).unwrap();
    assert_eq!(
        gradient.rasterize(3, 0),
        Err(Error::DegenerateDimension {
            width: 3,
            height: 0
        })
    );
}
