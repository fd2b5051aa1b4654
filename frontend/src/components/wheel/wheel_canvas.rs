use yew::prelude::*;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use wasm_bindgen::JsCast;
use std::f64::consts::PI;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use shared::wheel::{GradientDirection, Prize, PrizeFill};

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub prizes: Vec<Prize>,
    /// Absolute wheel rotation in degrees.
    pub rotation: f64,
    pub is_spinning: bool,
    /// Non-zero after a resolved spin; each value draws one celebration
    /// burst. Zero suppresses the burst entirely.
    pub burst: u32,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let surface_ok = use_state(|| true);

    {
        let canvas_ref = canvas_ref.clone();
        let surface_ok = surface_ok.clone();
        let prizes = props.prizes.clone();
        let rotation = props.rotation;
        let is_spinning = props.is_spinning;
        let burst = props.burst;

        use_effect_with(
            (prizes, rotation, is_spinning, burst),
            move |(prizes, rotation, is_spinning, burst)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    let drawn = draw_wheel(&canvas, prizes, *rotation, *is_spinning, *burst);
                    if *surface_ok != drawn {
                        surface_ok.set(drawn);
                    }
                }
                || ()
            },
        );
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width="450"
                height="450"
                class="w-full max-w-[450px] h-auto rounded-full shadow-lg transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(130, 100, 255, 0.4));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
            if !*surface_ok {
                <p class="mt-2 text-center text-sm text-yellow-700 dark:text-yellow-400">
                    {"The wheel cannot be drawn in this browser."}
                </p>
            }
        </div>
    }
}

/// Returns false when no 2d context is available. A missing drawing surface
/// is a warning, never a crash; the widget stays inert until one exists.
fn draw_wheel(
    canvas: &HtmlCanvasElement,
    prizes: &[Prize],
    rotation: f64,
    is_spinning: bool,
    burst: u32,
) -> bool {
    let context = match canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
    {
        Some(context) => context,
        None => {
            log::warn!("2d canvas context unavailable; wheel rendering skipped");
            return false;
        }
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = if width < height { width / 2.0 - 20.0 } else { height / 2.0 - 20.0 };

    context.clear_rect(0.0, 0.0, width, height);

    let is_dark_mode = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| el.class_list().contains("dark"))
        .unwrap_or(false);

    // Outer glow, stronger while spinning
    let glow_intensity = if is_spinning { 0.25 } else { 0.15 };
    context.begin_path();
    if is_dark_mode {
        context.set_fill_style_str(&format!("rgba(130, 100, 255, {})", glow_intensity));
    } else {
        context.set_fill_style_str(&format!("rgba(100, 130, 255, {})", glow_intensity));
    }
    let _ = context.arc(center_x, center_y, radius + 15.0, 0.0, 2.0 * PI);
    context.fill();

    // Wheel background
    context.begin_path();
    if is_dark_mode {
        context.set_fill_style_str("#1a1c2e");
    } else {
        context.set_fill_style_str("#f0f2ff");
    }
    let _ = context.arc(center_x, center_y, radius, 0.0, 2.0 * PI);
    context.fill();

    if prizes.is_empty() {
        context.set_text_align("center");
        context.set_text_baseline("middle");
        context.set_font("bold 18px 'Segoe UI', Roboto, system-ui, sans-serif");
        context.set_fill_style_str(if is_dark_mode { "#6b7280" } else { "#9ca3af" });
        let _ = context.fill_text("Add prizes to preview the wheel", center_x, center_y);
        return true;
    }

    let slice = 2.0 * PI / prizes.len() as f64;

    context.save();
    let _ = context.translate(center_x, center_y);
    let _ = context.rotate(rotation * PI / 180.0);
    let _ = context.translate(-center_x, -center_y);

    // Slices, in list order from angle 0, clockwise
    for (i, prize) in prizes.iter().enumerate() {
        let start = i as f64 * slice;
        let end = start + slice;

        context.begin_path();
        set_slice_fill(&context, prize, center_x, center_y, radius);
        context.move_to(center_x, center_y);
        let _ = context.arc(center_x, center_y, radius, start, end);
        context.fill();

        if is_spinning {
            let shimmer = (js_sys::Date::now() / 400.0).sin() * 0.15 + 0.15;
            context.begin_path();
            context.set_fill_style_str(&format!("rgba(255, 255, 255, {})", shimmer));
            context.move_to(center_x, center_y);
            let _ = context.arc(center_x, center_y, radius, start, end);
            context.fill();
        }
    }

    // Dividers between slices
    let divider_width = 2.5;
    for i in 0..prizes.len() {
        let angle = i as f64 * slice;
        let end_x = center_x + radius * angle.cos();
        let end_y = center_y + radius * angle.sin();

        context.begin_path();
        context.set_stroke_style_str(if is_dark_mode {
            "rgba(255, 255, 255, 0.7)"
        } else {
            "rgba(255, 255, 255, 0.9)"
        });
        context.set_line_width(divider_width);
        context.move_to(center_x, center_y);
        context.line_to(end_x, end_y);
        context.stroke();
    }

    // Labels along slice midpoints
    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.set_fill_style_str("#ffffff");
    context.set_shadow_color(if is_dark_mode { "rgba(0, 0, 0, 0.7)" } else { "rgba(0, 0, 0, 0.5)" });
    context.set_shadow_blur(3.0);
    context.set_shadow_offset_x(1.0);
    context.set_shadow_offset_y(1.0);

    let font_size = if prizes.len() > 8 { 14.0 } else { 18.0 };
    for (i, prize) in prizes.iter().enumerate() {
        let midpoint = (i as f64 + 0.5) * slice;
        context.save();
        let _ = context.translate(center_x, center_y);
        let _ = context.rotate(midpoint);
        let _ = context.translate(radius * 0.62, 0.0);
        context.set_font(&format!(
            "bold {}px 'Segoe UI', Roboto, system-ui, sans-serif",
            font_size
        ));
        let _ = context.fill_text(&clip_label(&prize.label), 0.0, 0.0);
        context.restore();
    }

    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);
    context.set_shadow_offset_x(0.0);
    context.set_shadow_offset_y(0.0);

    // Hub
    let inner_radius = radius * 0.18;
    context.begin_path();
    if is_dark_mode {
        context.set_fill_style_str("#2d3142");
    } else {
        context.set_fill_style_str("#8b5cf6");
    }
    let _ = context.arc(center_x, center_y, inner_radius, 0.0, 2.0 * PI);
    context.fill();

    context.begin_path();
    context.set_fill_style_str(if is_dark_mode { "#d8b4fe" } else { "#ffffff" });
    let _ = context.arc(center_x, center_y, inner_radius * 0.3, 0.0, 2.0 * PI);
    context.fill();

    context.restore();

    // Outer ring
    context.begin_path();
    if is_spinning {
        let pulse = (js_sys::Date::now() / 400.0).sin() * 0.2 + 0.5;
        let stroke = if is_dark_mode {
            format!("rgba(180, 130, 255, {})", pulse)
        } else {
            format!("rgba(130, 100, 255, {})", pulse)
        };
        context.set_stroke_style_str(&stroke);
        context.set_line_width(5.0);
    } else {
        context.set_stroke_style_str(if is_dark_mode {
            "rgba(180, 130, 255, 0.5)"
        } else {
            "rgba(130, 100, 255, 0.5)"
        });
        context.set_line_width(4.0);
    }
    let _ = context.arc(center_x, center_y, radius - 2.0, 0.0, 2.0 * PI);
    context.stroke();

    draw_pointer(&context, center_x, center_y, radius, is_spinning);

    if is_spinning {
        draw_spin_particles(&context, center_x, center_y, radius);
    } else if burst > 0 {
        draw_celebration_burst(&context, prizes, center_x, center_y, radius, burst);
    }

    true
}

fn set_slice_fill(
    context: &CanvasRenderingContext2d,
    prize: &Prize,
    center_x: f64,
    center_y: f64,
    radius: f64,
) {
    match &prize.fill {
        PrizeFill::Solid { color } => context.set_fill_style_str(color),
        PrizeFill::Gradient { from, to, direction } => {
            let (x0, y0, x1, y1) = match direction {
                GradientDirection::Horizontal => {
                    (center_x - radius, center_y, center_x + radius, center_y)
                }
                GradientDirection::Vertical => {
                    (center_x, center_y - radius, center_x, center_y + radius)
                }
                GradientDirection::Diagonal => (
                    center_x - radius,
                    center_y - radius,
                    center_x + radius,
                    center_y + radius,
                ),
            };
            let gradient = context.create_linear_gradient(x0, y0, x1, y1);
            let _ = gradient.add_color_stop(0.0, from);
            let _ = gradient.add_color_stop(1.0, to);
            context.set_fill_style_canvas_gradient(&gradient);
        }
    }
}

fn draw_pointer(
    context: &CanvasRenderingContext2d,
    center_x: f64,
    center_y: f64,
    radius: f64,
    is_spinning: bool,
) {
    context.set_shadow_color(if is_spinning {
        "rgba(255, 215, 130, 0.8)"
    } else {
        "rgba(255, 215, 0, 0.6)"
    });
    context.set_shadow_blur(if is_spinning { 10.0 } else { 4.0 });
    context.set_shadow_offset_x(0.0);
    context.set_shadow_offset_y(0.0);

    // Rounded triangle at the top of the wheel
    let pointer_width = 20.0;
    let pointer_height = 30.0;
    let pointer_radius = 5.0;

    context.begin_path();
    context.move_to(center_x, center_y - radius + 5.0);

    let left_corner_x = center_x - pointer_width;
    let left_corner_y = center_y - radius - pointer_height;
    context.line_to(left_corner_x + pointer_radius, left_corner_y + pointer_radius);
    context.quadratic_curve_to(
        left_corner_x,
        left_corner_y + pointer_radius,
        left_corner_x,
        left_corner_y,
    );
    context.line_to(center_x + pointer_width - pointer_radius, left_corner_y);
    context.quadratic_curve_to(
        center_x + pointer_width,
        left_corner_y,
        center_x + pointer_width,
        left_corner_y + pointer_radius,
    );
    context.close_path();

    if is_spinning {
        context.set_fill_style_str("#ffd700");
    } else {
        context.set_fill_style_str("#f59e0b");
    }
    context.fill();

    context.set_stroke_style_str("#e69500");
    context.set_line_width(1.5);
    context.stroke();

    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);
}

fn draw_spin_particles(
    context: &CanvasRenderingContext2d,
    center_x: f64,
    center_y: f64,
    radius: f64,
) {
    let time = js_sys::Date::now();
    let num_particles = 12;

    for i in 0..num_particles {
        let angle = (time / 1000.0 + i as f64 * 2.0 * PI / num_particles as f64) % (2.0 * PI);
        let distance = radius * 1.1 + (time / 500.0 + i as f64).sin() * 10.0;
        let x = center_x + distance * angle.cos();
        let y = center_y + distance * angle.sin();
        let size = 2.0 + (time / 300.0 + i as f64).sin() * 1.5;

        context.begin_path();
        context.set_fill_style_str("rgba(255, 215, 130, 0.7)");
        let _ = context.arc(x, y, size, 0.0, 2.0 * PI);
        context.fill();
    }
}

/// One confetti scatter per resolved spin, seeded by the burst counter so
/// redraws of the same resolve keep the same pattern.
fn draw_celebration_burst(
    context: &CanvasRenderingContext2d,
    prizes: &[Prize],
    center_x: f64,
    center_y: f64,
    radius: f64,
    burst: u32,
) {
    let mut rng = SmallRng::seed_from_u64(burst as u64);
    let palette: Vec<&str> = prizes
        .iter()
        .map(|p| match &p.fill {
            PrizeFill::Solid { color } => color.as_str(),
            PrizeFill::Gradient { from, .. } => from.as_str(),
        })
        .collect();

    for _ in 0..48 {
        let angle = rng.gen_range(0.0..2.0 * PI);
        let distance = rng.gen_range(radius * 0.4..radius * 1.2);
        let x = center_x + distance * angle.cos();
        let y = center_y + distance * angle.sin();
        let size = rng.gen_range(2.0..5.5);
        let color = palette[rng.gen_range(0..palette.len())];

        context.begin_path();
        context.set_fill_style_str(color);
        if rng.gen_bool(0.5) {
            let _ = context.arc(x, y, size, 0.0, 2.0 * PI);
            context.fill();
        } else {
            context.fill_rect(x - size / 2.0, y - size / 2.0, size, size * 1.6);
        }
    }
}

fn clip_label(label: &str) -> String {
    const MAX_CHARS: usize = 14;
    if label.chars().count() <= MAX_CHARS {
        label.to_string()
    } else {
        let clipped: String = label.chars().take(MAX_CHARS - 1).collect();
        format!("{}…", clipped)
    }
}

/// Easing for the spin animation: fast start, long visible deceleration.
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}
