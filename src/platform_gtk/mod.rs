use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::ParallelEngine;
use crate::render::{CairoContextRenderer, Renderer};

pub type SharedEngine<R> = Rc<RefCell<ParallelEngine<R>>>;

/// Hosts a [`ParallelEngine`] inside a GTK4 `DrawingArea`.
///
/// Frame requests from the engine become `queue_draw` calls; the draw
/// callback paints the current frame; motion and drag controllers feed the
/// engine's pointer handlers.
pub struct GtkParallelAdapter<R: Renderer + CairoContextRenderer + 'static> {
    engine: SharedEngine<R>,
    drawing_area: gtk::DrawingArea,
}

impl<R: Renderer + CairoContextRenderer + 'static> GtkParallelAdapter<R> {
    #[must_use]
    pub fn new(engine: ParallelEngine<R>) -> Self {
        let viewport = engine.viewport();
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        drawing_area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));

        let engine = Rc::new(RefCell::new(engine));
        let adapter = Self {
            engine,
            drawing_area,
        };
        adapter.install_frame_requester();
        adapter.install_draw_func();
        adapter.install_pointer_controllers();
        adapter
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn engine(&self) -> SharedEngine<R> {
        Rc::clone(&self.engine)
    }

    fn install_frame_requester(&self) {
        let area = self.drawing_area.downgrade();
        self.engine
            .borrow_mut()
            .set_frame_requester(Box::new(move || {
                if let Some(area) = area.upgrade() {
                    area.queue_draw();
                }
            }));
    }

    fn install_draw_func(&self) {
        let engine = Rc::clone(&self.engine);
        self.drawing_area
            .set_draw_func(move |_widget, context, width, height| {
                if width <= 0 || height <= 0 {
                    return;
                }
                let Ok(mut chart) = engine.try_borrow_mut() else {
                    return;
                };
                if let Err(err) = chart.on_animation_frame_on_cairo_context(context) {
                    warn!(error = %err, "parallel coordinates draw failed");
                }
            });
    }

    fn install_pointer_controllers(&self) {
        let motion = gtk::EventControllerMotion::new();
        {
            let engine = Rc::clone(&self.engine);
            motion.connect_motion(move |_, x, y| {
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    chart.pointer_move(x, y);
                }
            });
        }
        {
            let engine = Rc::clone(&self.engine);
            motion.connect_leave(move |_| {
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    chart.pointer_leave();
                }
            });
        }
        self.drawing_area.add_controller(motion);

        let drag = gtk::GestureDrag::new();
        {
            let engine = Rc::clone(&self.engine);
            drag.connect_drag_begin(move |_, start_x, start_y| {
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    chart.pointer_down(start_x, start_y);
                }
            });
        }
        {
            let engine = Rc::clone(&self.engine);
            drag.connect_drag_update(move |gesture, offset_x, offset_y| {
                let Some((start_x, start_y)) = gesture.start_point() else {
                    return;
                };
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    chart.pointer_drag(start_x + offset_x, start_y + offset_y);
                }
            });
        }
        {
            let engine = Rc::clone(&self.engine);
            drag.connect_drag_end(move |gesture, offset_x, offset_y| {
                let (x, y) = gesture
                    .start_point()
                    .map_or((f64::NAN, f64::NAN), |(start_x, start_y)| {
                        (start_x + offset_x, start_y + offset_y)
                    });
                if let Ok(mut chart) = engine.try_borrow_mut() {
                    chart.pointer_up(x, y);
                }
            });
        }
        self.drawing_area.add_controller(drag);
    }
}
