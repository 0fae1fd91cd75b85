// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// SVG drawing of a tessellated room: colored faces pulled slightly toward
// their centroid so neighbours stay distinguishable, then the room outline.

use std::fmt::Write;

use monotess::{Point, Tessellator};

pub const WIDTH: f64 = 640.0;
pub const HEIGHT: f64 = 480.0;

/// Fully saturated hues at 0, 90, 180 and 270 degrees, value 80%.
pub const COLOR_WHEEL: [(u8, u8, u8); 4] = [(204, 0, 0), (102, 204, 0), (0, 204, 204), (102, 0, 204)];

pub struct View {
    pub scale: f64,
    /// Pixels each face corner moves toward the face centroid.
    pub shrink: f64,
}

impl View {
    /// World units to screen pixels, y up, origin at the canvas centre.
    fn to_screen(&self, p: Point) -> (f64, f64) {
        (p.x * self.scale + WIDTH / 2.0, -p.y * self.scale + HEIGHT / 2.0)
    }

    fn shrunk(&self, ring: &[(f64, f64)]) -> Vec<(f64, f64)> {
        if self.shrink == 0.0 || ring.is_empty() {
            return ring.to_vec();
        }
        let n = ring.len() as f64;
        let mx = ring.iter().map(|p| p.0).sum::<f64>() / n;
        let my = ring.iter().map(|p| p.1).sum::<f64>() / n;
        ring.iter()
            .map(|&(x, y)| {
                let (dx, dy) = (mx - x, my - y);
                let len = (dx * dx + dy * dy).sqrt();
                if len <= self.shrink {
                    (mx, my)
                } else {
                    (x + dx / len * self.shrink, y + dy / len * self.shrink)
                }
            })
            .collect()
    }
}

fn points_attr(ring: &[(f64, f64)]) -> String {
    let mut s = String::new();
    for (i, (x, y)) in ring.iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        let _ = write!(s, "{:.2},{:.2}", x, y);
    }
    s
}

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("rgb({},{},{})", r, g, b)
}

pub fn render(tess: &Tessellator, name: &str, view: &View) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        w = WIDTH,
        h = HEIGHT
    );
    let _ = writeln!(out, "<title>{}</title>", escape(name));
    let _ = writeln!(out, r#"<rect width="100%" height="100%" fill="white"/>"#);

    let verts = tess.vertices();
    for (face, cycle) in tess.faces() {
        let ring: Vec<(f64, f64)> = cycle
            .iter()
            .map(|&v| view.to_screen(verts[v as usize]))
            .collect();
        let color = tess
            .colors()
            .and_then(|c| c.get(face))
            .map(|&c| COLOR_WHEEL[c % COLOR_WHEEL.len()])
            .unwrap_or((128, 128, 128));
        let _ = writeln!(
            out,
            r#"<polygon class="face" data-face="{}" points="{}" fill="{c}" fill-opacity="0.35" stroke="{c}" stroke-width="3"/>"#,
            face,
            points_attr(&view.shrunk(&ring)),
            c = rgb(color)
        );
    }

    let outline: Vec<(f64, f64)> = verts.iter().map(|&p| view.to_screen(p)).collect();
    let _ = writeln!(
        out,
        r#"<polygon class="room" points="{}" fill="none" stroke="{}" stroke-width="1"/>"#,
        points_attr(&outline),
        rgb((255, 0, 0))
    );
    out.push_str("</svg>\n");
    out
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
