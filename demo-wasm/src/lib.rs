use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use wyrm::{
    Color, Creature, CreatureConfig, FollowInput, FrameLoop, FrameObserver, Palette, PointerKind,
    Surface, Vec2, Viewport,
};

#[wasm_bindgen(start)]
pub fn main() {
    std::panic::set_hook(Box::new(|info| {
        web_sys::console::error_1(&info.to_string().into());
    }));
}

// ---- Canvas surface ----

struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl Surface<f64> for CanvasSurface {
    fn fill_rect(&mut self, origin: Vec2<f64>, size: Vec2<f64>) {
        self.ctx.fill_rect(origin.x, origin.y, size.x, size.y);
    }
    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }
    fn move_to(&mut self, p: Vec2<f64>) {
        self.ctx.move_to(p.x, p.y);
    }
    fn line_to(&mut self, p: Vec2<f64>) {
        self.ctx.line_to(p.x, p.y);
    }
    fn quadratic_curve_to(&mut self, control: Vec2<f64>, end: Vec2<f64>) {
        self.ctx.quadratic_curve_to(control.x, control.y, end.x, end.y);
    }
    fn arc(&mut self, center: Vec2<f64>, radius: f64, start: f64, end: f64) {
        self.ctx.arc(center.x, center.y, radius, start, end).ok();
    }
    fn ellipse(&mut self, center: Vec2<f64>, radii: Vec2<f64>, rotation: f64, start: f64, end: f64) {
        self.ctx
            .ellipse(center.x, center.y, radii.x, radii.y, rotation, start, end)
            .ok();
    }
    fn stroke(&mut self) {
        self.ctx.stroke();
    }
    fn fill(&mut self) {
        self.ctx.fill();
    }
    fn set_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }
    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }
    fn set_stroke_color(&mut self, color: Color) {
        self.ctx.set_stroke_style_str(&color.to_hex());
    }
    fn set_fill_color(&mut self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_hex());
    }
    fn set_round_caps(&mut self) {
        self.ctx.set_line_cap("round");
        self.ctx.set_line_join("round");
    }
    fn save(&mut self) {
        self.ctx.save();
    }
    fn restore(&mut self) {
        self.ctx.restore();
    }
    fn translate(&mut self, offset: Vec2<f64>) {
        self.ctx.translate(offset.x, offset.y).ok();
    }
    fn rotate(&mut self, angle: f64) {
        self.ctx.rotate(angle).ok();
    }
}

// ---- Console logging ----

struct ConsoleObserver;

impl FrameObserver for ConsoleObserver {
    fn on_rebuild(&mut self, points: usize) {
        web_sys::console::log_1(&format!("wyrm: spine rebuilt with {points} points").into());
    }

    fn on_leg_skipped(&mut self, spine_index: usize) {
        web_sys::console::warn_1(&format!("wyrm: leg at spine index {spine_index} skipped").into());
    }
}

// ---- Creature Demo ----

#[wasm_bindgen]
pub struct CreatureDemo {
    creature: Creature<f64>,
    frames: FrameLoop,
    input: FollowInput,
    canvas: HtmlCanvasElement,
    surface: CanvasSurface,
}

#[wasm_bindgen]
impl CreatureDemo {
    /// `coarse` should reflect `matchMedia('(pointer: coarse)')`.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, coarse: bool) -> Result<CreatureDemo, JsValue> {
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(canvas_id))
            .ok_or_else(|| JsValue::from_str(&format!("no element #{canvas_id}")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str("not a canvas"))?;

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("not a 2d context"))?;

        let creature = Creature::new(CreatureConfig::new())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(CreatureDemo {
            creature,
            frames: FrameLoop::new(),
            input: FollowInput::new(coarse),
            canvas,
            surface: CanvasSurface { ctx },
        })
    }

    /// Size the backing store for `dpr` and recenter the creature.
    pub fn resize(&mut self, css_width: f64, css_height: f64, dpr: f64) {
        let viewport = Viewport::new(css_width, css_height, dpr);
        let (width, height) = viewport.backing_size();
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        let ratio = viewport.pixel_ratio();
        self.surface.ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0).ok();
        self.creature.resize(&viewport, &mut ConsoleObserver);
    }

    /// Start gesture. Returns true the first time only; begin requesting frames then.
    pub fn start(&mut self) -> bool {
        self.frames.start()
    }

    pub fn stop(&mut self) {
        self.frames.stop();
    }

    /// Run one update and draw. Request another animation frame while this returns true.
    pub fn frame(&mut self) -> bool {
        self.frames.tick(&mut self.creature, &mut self.surface, &mut ConsoleObserver)
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        if let Some(target) = self.input.pointer_down(Vec2::new(x, y)) {
            self.creature.set_target(target);
        }
    }

    pub fn pointer_move(&mut self, pointer_type: &str, x: f64, y: f64) {
        let kind = PointerKind::from_dom(pointer_type);
        if let Some(target) = self.input.pointer_move(kind, Vec2::new(x, y)) {
            self.creature.set_target(target);
        }
    }

    pub fn pointer_up(&mut self) {
        self.input.pointer_up();
    }

    pub fn pointer_cancel(&mut self) {
        self.input.pointer_cancel();
    }

    /// Select a swatch; returns the name actually applied.
    pub fn set_color(&mut self, name: &str) -> String {
        let palette = Palette::from_name(name);
        self.creature.set_palette(palette);
        palette.name().to_string()
    }

    /// CSS color of the current swatch, for styling the page chrome.
    pub fn color_hex(&self) -> String {
        self.creature.palette().color().to_hex()
    }

    /// Returns [x, y] of the head.
    pub fn head(&self) -> Vec<f64> {
        let h = self.creature.head();
        vec![h.x, h.y]
    }
}
