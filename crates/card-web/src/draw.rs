//! Immediate-mode drawing of core state onto a 2D canvas context.
//!
//! Tree compositing runs back half, lights, ornaments, front half, star, so
//! front foliage occludes the decorations behind it without a z-sort.

use std::f64::consts::TAU;

use card_core::{
    project, star_opacity, FairyLight, Ornament, SnowField, TreeParticle, TreeScene, BASE_MARGIN,
    BURST_CROSS_MIN_OPACITY, BURST_CROSS_MIN_SIZE, BURST_SHADES, SCENE_HEIGHT, SCENE_WIDTH,
    STAR_Y,
};
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys as web;

use crate::constants::*;

// fillStyle/strokeStyle are assigned reflectively; the concrete setter names
// have churned across web-sys releases.
fn set_fill_style(ctx: &web::CanvasRenderingContext2d, value: &str) {
    let _ = Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("fillStyle"),
        &JsValue::from_str(value),
    );
}

fn set_stroke_style(ctx: &web::CanvasRenderingContext2d, value: &str) {
    let _ = Reflect::set(
        ctx.as_ref(),
        &JsValue::from_str("strokeStyle"),
        &JsValue::from_str(value),
    );
}

pub fn draw_snow(ctx: &web::CanvasRenderingContext2d, field: &SnowField) {
    ctx.clear_rect(0.0, 0.0, field.width as f64, field.height as f64);

    for f in &field.flakes {
        ctx.begin_path();
        let _ = ctx.arc(f.x as f64, f.y as f64, f.size as f64, 0.0, TAU);
        set_fill_style(ctx, &format!("rgba(255, 255, 255, {})", f.opacity));
        ctx.fill();
    }

    for burst in &field.bursts {
        for p in &burst.particles {
            if p.opacity <= 0.0 {
                continue;
            }
            let (x, y, size) = (p.x as f64, p.y as f64, p.size as f64);
            ctx.begin_path();
            let _ = ctx.arc(x, y, size, 0.0, TAU);
            ctx.set_global_alpha(p.opacity.min(1.0) as f64);
            ctx.set_shadow_blur(BURST_GLOW_BLUR);
            ctx.set_shadow_color("rgba(255, 255, 255, 0.5)");
            set_fill_style(ctx, BURST_SHADES[p.shade]);
            ctx.fill();
            ctx.set_shadow_blur(0.0);

            // Thin 4-point cross on the larger, still-bright particles
            if p.size > BURST_CROSS_MIN_SIZE && p.opacity > BURST_CROSS_MIN_OPACITY {
                set_stroke_style(ctx, "rgba(255, 255, 255, 0.5)");
                ctx.set_line_width(1.0);
                ctx.begin_path();
                ctx.move_to(x - size, y);
                ctx.line_to(x + size, y);
                ctx.move_to(x, y - size);
                ctx.line_to(x, y + size);
                ctx.stroke();
            }
            ctx.set_global_alpha(1.0);
        }
    }
}

pub fn draw_tree(ctx: &web::CanvasRenderingContext2d, scene: &TreeScene, now_ms: f64) {
    ctx.clear_rect(0.0, 0.0, SCENE_WIDTH as f64, SCENE_HEIGHT as f64);

    for p in &scene.particles {
        let pr = project(p.angle, p.radius, p.y, scene.rotation);
        if pr.z < 0.0 {
            draw_tree_particle(ctx, p, pr.screen_x, pr.screen_y, pr.depth);
        }
    }
    for light in &scene.lights {
        draw_light(ctx, light, scene.rotation, now_ms);
    }
    for ornament in &scene.ornaments {
        if !ornament.culled(scene.rotation) {
            draw_ornament(ctx, ornament, scene.rotation);
        }
    }
    for p in &scene.particles {
        let pr = project(p.angle, p.radius, p.y, scene.rotation);
        if pr.z >= 0.0 {
            draw_tree_particle(ctx, p, pr.screen_x, pr.screen_y, pr.depth);
        }
    }

    draw_star(ctx, now_ms);
}

fn draw_tree_particle(
    ctx: &web::CanvasRenderingContext2d,
    p: &TreeParticle,
    screen_x: f32,
    screen_y: f32,
    depth: f32,
) {
    ctx.begin_path();
    let radius = (p.size * depth * PARTICLE_DRAW_SCALE) as f64;
    let _ = ctx.arc(screen_x as f64, screen_y as f64, radius, 0.0, TAU);
    let [r, g, b] = p.rgb;
    set_fill_style(ctx, &format!("rgba({r}, {g}, {b}, {})", p.opacity(depth)));
    if p.warm {
        ctx.set_shadow_blur(WARM_GLOW_BLUR);
        ctx.set_shadow_color("rgba(251, 191, 36, 0.3)");
    }
    ctx.fill();
    if p.warm {
        ctx.set_shadow_blur(0.0);
    }
}

fn draw_light(
    ctx: &web::CanvasRenderingContext2d,
    light: &FairyLight,
    rotation: f32,
    now_ms: f64,
) {
    let pr = project(light.phase, light.radius(), light.y, rotation);
    ctx.begin_path();
    let _ = ctx.arc(
        pr.screen_x as f64,
        pr.screen_y as f64,
        (LIGHT_DOT_RADIUS * pr.depth) as f64,
        0.0,
        TAU,
    );
    set_fill_style(ctx, light.hue);
    ctx.set_global_alpha((light.flicker(now_ms) * pr.depth).clamp(0.0, 1.0) as f64);
    ctx.set_shadow_blur(LIGHT_GLOW_BLUR);
    ctx.set_shadow_color(light.hue);
    ctx.fill();
    ctx.set_global_alpha(1.0);
    ctx.set_shadow_blur(0.0);
}

fn draw_ornament(ctx: &web::CanvasRenderingContext2d, ornament: &Ornament, rotation: f32) {
    let pr = project(ornament.angle, ornament.radius, ornament.y, rotation);
    ctx.set_font(&format!(
        "{}px serif",
        (ORNAMENT_FONT_PX * pr.depth).floor() as i32
    ));
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    set_fill_style(ctx, ornament.tint);
    ctx.set_shadow_blur(ORNAMENT_GLOW_BLUR);
    ctx.set_shadow_color("rgba(255, 255, 255, 0.5)");
    let _ = ctx.fill_text(
        ornament.kind.glyph(),
        pr.screen_x as f64,
        pr.screen_y as f64,
    );
    ctx.set_shadow_blur(0.0);
}

fn draw_star(ctx: &web::CanvasRenderingContext2d, now_ms: f64) {
    ctx.set_font(STAR_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.set_shadow_blur(STAR_GLOW_BLUR);
    ctx.set_shadow_color("#fcd34d");
    set_fill_style(ctx, &format!("rgba(255, 215, 0, {})", star_opacity(now_ms)));
    let _ = ctx.fill_text(
        "\u{1F31F}",
        (SCENE_WIDTH / 2.0) as f64,
        (SCENE_HEIGHT - BASE_MARGIN - STAR_Y) as f64,
    );
    ctx.set_shadow_blur(0.0);
}
