use fieldfx_core::draw::{DrawCommand, DrawList, GradientStop};
use std::f64::consts::TAU;
use web_sys::{CanvasGradient, CanvasRenderingContext2d};

/// Replay one frame's draw list onto a 2D context.
pub fn replay(ctx: &CanvasRenderingContext2d, width: f64, height: f64, list: &DrawList) {
    for command in list.iter() {
        match command {
            DrawCommand::Clear => ctx.clear_rect(0.0, 0.0, width, height),
            DrawCommand::Fill { color } => {
                ctx.set_fill_style_str(&color.to_css());
                ctx.fill_rect(0.0, 0.0, width, height);
            }
            DrawCommand::Circle { center, radius, color } => {
                ctx.begin_path();
                if ctx
                    .arc(center.x as f64, center.y as f64, *radius as f64, 0.0, TAU)
                    .is_ok()
                {
                    ctx.set_fill_style_str(&color.to_css());
                    ctx.fill();
                }
            }
            DrawCommand::Glow {
                center,
                inner_radius,
                outer_radius,
                stops,
            } => {
                let (x, y) = (center.x as f64, center.y as f64);
                let Ok(gradient) =
                    ctx.create_radial_gradient(x, y, *inner_radius as f64, x, y, *outer_radius as f64)
                else {
                    continue;
                };
                add_stops(&gradient, stops);
                ctx.begin_path();
                if ctx.arc(x, y, *outer_radius as f64, 0.0, TAU).is_ok() {
                    ctx.set_fill_style_canvas_gradient(&gradient);
                    ctx.fill();
                }
            }
            DrawCommand::Trail {
                points,
                width: line_width,
                from,
                to,
            } => {
                let (Some(first), Some(last)) = (points.first(), points.last()) else {
                    continue;
                };
                ctx.begin_path();
                ctx.move_to(first.x as f64, first.y as f64);
                for p in &points[1..] {
                    ctx.line_to(p.x as f64, p.y as f64);
                }
                let gradient = ctx.create_linear_gradient(
                    first.x as f64,
                    first.y as f64,
                    last.x as f64,
                    last.y as f64,
                );
                let _ = gradient.add_color_stop(0.0, &from.to_css());
                let _ = gradient.add_color_stop(1.0, &to.to_css());
                ctx.set_stroke_style_canvas_gradient(&gradient);
                ctx.set_line_width(*line_width as f64);
                ctx.set_line_cap("round");
                ctx.stroke();
            }
        }
    }
}

fn add_stops(gradient: &CanvasGradient, stops: &[GradientStop]) {
    for stop in stops {
        let _ = gradient.add_color_stop(stop.offset.clamp(0.0, 1.0), &stop.color.to_css());
    }
}
