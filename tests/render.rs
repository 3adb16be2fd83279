use cairo::{Context, Format, ImageSurface};
use redboxman::assets::{AssetState, Bitmap};
use redboxman::draw::{CairoPainter, Surface, render_scene};
use redboxman::input::{InputState, OverlaySettings, PointerEvent};

const WIDTH: i32 = 320;
const HEIGHT: i32 = 240;

fn make_input_state(overlay_enabled: bool) -> InputState {
    let mut surface = Surface::default();
    surface.initialize(WIDTH as u32, HEIGHT as u32);
    InputState::with_defaults(surface, OverlaySettings::default(), overlay_enabled)
}

fn render(state: &InputState) -> ImageSurface {
    let surface = ImageSurface::create(Format::ARgb32, WIDTH, HEIGHT).unwrap();
    {
        let ctx = Context::new(&surface).unwrap();
        let mut painter = CairoPainter::new(&ctx);
        render_scene(&mut painter, state);
    }
    surface.flush();
    surface
}

/// Returns (r, g, b, a) for one pixel of a premultiplied ARGB32 surface.
fn pixel(surface: &mut ImageSurface, x: i32, y: i32) -> (u8, u8, u8, u8) {
    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let offset = y as usize * stride + x as usize * 4;
    let word = u32::from_ne_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]);
    (
        (word >> 16) as u8,
        (word >> 8) as u8,
        word as u8,
        (word >> 24) as u8,
    )
}

fn cyan_bitmap(size: i32) -> Bitmap {
    let surface = ImageSurface::create(Format::ARgb32, size, size).unwrap();
    {
        let ctx = Context::new(&surface).unwrap();
        ctx.set_source_rgb(0.0, 1.0, 1.0);
        ctx.paint().unwrap();
    }
    Bitmap::from_surface(surface)
}

#[test]
fn empty_canvas_is_background_colored() {
    let state = make_input_state(false);
    let mut surface = render(&state);
    assert_eq!(pixel(&mut surface, 0, 0), (255, 255, 255, 255));
    assert_eq!(pixel(&mut surface, WIDTH - 1, HEIGHT - 1), (255, 255, 255, 255));
}

#[test]
fn shift_click_paints_the_figure_at_the_click() {
    let mut state = make_input_state(false);
    state.on_pointer_down(PointerEvent::plain(20.0, 30.0).with_shift());
    let mut surface = render(&state);

    // Inside the head, clear of the eyes
    assert_eq!(pixel(&mut surface, 25, 35), (0xDD, 0, 0, 255));
    // Inside the left eye, clear of the pupil
    assert_eq!(pixel(&mut surface, 45, 48), (255, 255, 0, 255));
    // Left of the anchor stays untouched
    assert_eq!(pixel(&mut surface, 10, 35), (255, 255, 255, 255));
}

#[test]
fn ctrl_click_stamps_the_bitmap() {
    let mut state = make_input_state(false);
    state.asset = AssetState::Ready(cyan_bitmap(8));
    state.on_pointer_down(PointerEvent::plain(100.0, 100.0).with_ctrl());
    let mut surface = render(&state);

    assert_eq!(pixel(&mut surface, 101, 101), (0, 255, 255, 255));
    assert_eq!(pixel(&mut surface, 107, 107), (0, 255, 255, 255));
    assert_eq!(pixel(&mut surface, 109, 109), (255, 255, 255, 255));
}

#[test]
fn stamps_cover_figures() {
    let mut state = make_input_state(false);
    state.asset = AssetState::Ready(cyan_bitmap(16));
    // Stamp first, figure second: the stamp still ends up on top
    state.on_pointer_down(PointerEvent::plain(25.0, 35.0).with_ctrl());
    state.on_pointer_down(PointerEvent::plain(20.0, 30.0).with_shift());
    let mut surface = render(&state);

    assert_eq!(pixel(&mut surface, 30, 40), (0, 255, 255, 255));
}

#[test]
fn reset_click_leaves_a_blank_frame() {
    let mut state = make_input_state(true);
    state.on_pointer_down(PointerEvent::plain(20.0, 30.0).with_shift());
    state.on_pointer_down(PointerEvent::plain(60.0, 60.0));
    let mut surface = render(&state);

    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    let painted = (0..HEIGHT as usize)
        .flat_map(|y| data[y * stride..y * stride + WIDTH as usize * 4].iter())
        .any(|byte| *byte != 255);
    assert!(!painted, "reset frame should contain only background");
}

#[test]
fn overlay_draws_near_its_anchor() {
    let state = make_input_state(true);
    let mut surface = render(&state);

    let stride = surface.stride() as usize;
    let data = surface.data().unwrap();
    // Text sits on the baseline at y = 50, starting at x = 10
    let inked = (0..60usize)
        .flat_map(|y| data[y * stride..y * stride + 200 * 4].iter())
        .any(|byte| *byte != 255);
    assert!(inked, "overlay text should leave ink above its baseline");
}

#[test]
fn shipped_image_decodes() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/images/RedBoxMan.png");
    let bytes = std::fs::read(path).unwrap();
    let bitmap = Bitmap::from_png_bytes(&bytes).unwrap();
    assert_eq!((bitmap.width(), bitmap.height()), (116, 129));
}
