// One live run of the field against a drawing surface. `frame` is the
// whole per-tick pipeline; once `shut_down` has run it never touches the
// surface again, even if a stale callback still fires.

use crate::field::ParticleField;
use crate::links::{self, Link};
use crate::surface::Surface;
use wasm_bindgen::JsValue;

pub struct Animation {
    field: ParticleField,
    links: Vec<Link>,
    live: bool,
}

impl Animation {
    pub fn new(field: ParticleField) -> Animation {
        Animation {
            field,
            links: Vec::new(),
            live: true,
        }
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.field.resize(width, height);
    }

    pub fn shut_down(&mut self) {
        self.live = false;
    }

    // Step, clear, particles, then links on top, the same order every frame
    pub fn frame(&mut self, surface: &mut impl Surface) -> Result<(), JsValue> {
        if !self.live {
            return Ok(());
        }
        self.field.step();
        surface.clear();
        for particle in self.field.particles() {
            surface.fill_circle(particle.pos, particle.radius, particle.opacity)?;
        }
        links::collect_links_into(self.field.particles(), &mut self.links);
        for link in &self.links {
            let from = self.field.particles()[link.a].pos;
            let to = self.field.particles()[link.b].pos;
            surface.stroke_line(from, to, link.alpha);
        }
        Ok(())
    }
}
