use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::{RiskMap, SelectionChanged};
use crate::core::Surface;
use crate::render::CairoRenderer;

pub type UiRiskMap = Rc<RefCell<RiskMap<CairoRenderer>>>;
type UiSelectionHandler = Rc<RefCell<Option<Box<dyn FnMut(&SelectionChanged)>>>>;

/// Hosts a [`RiskMap`] inside a GTK `DrawingArea`.
///
/// Clicks select markers, drags pan, and vertical scrolling zooms.
pub struct GtkRiskMapAdapter {
    map: UiRiskMap,
    drawing_area: gtk::DrawingArea,
    selection_handler: UiSelectionHandler,
}

impl GtkRiskMapAdapter {
    #[must_use]
    pub fn new(map: RiskMap<CairoRenderer>) -> Self {
        let surface = map.surface();
        let map = Rc::new(RefCell::new(map));
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(surface.width as i32);
        drawing_area.set_content_height(surface.height as i32);
        drawing_area.set_focusable(true);

        drawing_area.set_draw_func({
            let map = Rc::clone(&map);
            move |_widget, context, width, height| {
                if width <= 0 || height <= 0 {
                    return;
                }
                let Ok(mut map) = map.try_borrow_mut() else {
                    return;
                };
                let surface = Surface::new(f64::from(width), f64::from(height));
                if let Err(err) = map.set_surface(surface) {
                    warn!(error = %err, "risk map resize failed");
                    return;
                }
                if let Err(err) = map.render_on_cairo_context(context) {
                    warn!(error = %err, "risk map draw failed");
                }
            }
        });

        let selection_handler: UiSelectionHandler = Rc::new(RefCell::new(None));
        attach_interactions(&drawing_area, &map, &selection_handler);
        Self {
            map,
            drawing_area,
            selection_handler,
        }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn map(&self) -> UiRiskMap {
        Rc::clone(&self.map)
    }

    /// Forwards click selections to `handler`.
    ///
    /// The handler runs after the map borrow is released, so it may call back
    /// into the adapter (for example to apply the new selection).
    pub fn connect_selection_changed<F>(&self, handler: F)
    where
        F: FnMut(&SelectionChanged) + 'static,
    {
        self.selection_handler.replace(Some(Box::new(handler)));
    }

    pub fn set_selected_country(&self, code: Option<&str>) {
        if let Ok(mut map) = self.map.try_borrow_mut() {
            map.set_selected_country(code);
        }
        self.drawing_area.queue_draw();
    }

    pub fn zoom_in(&self) {
        self.update(|map| map.zoom_in());
    }

    pub fn zoom_out(&self) {
        self.update(|map| map.zoom_out());
    }

    pub fn reset_view(&self) {
        self.update(|map| map.reset_view());
    }

    fn update(&self, apply: impl FnOnce(&mut RiskMap<CairoRenderer>)) {
        if let Ok(mut map) = self.map.try_borrow_mut() {
            apply(&mut map);
        }
        self.drawing_area.queue_draw();
    }
}

fn attach_interactions(
    drawing_area: &gtk::DrawingArea,
    map: &UiRiskMap,
    selection_handler: &UiSelectionHandler,
) {
    let motion = gtk::EventControllerMotion::new();
    {
        let map = Rc::clone(map);
        let drawing_area = drawing_area.clone();
        motion.connect_motion(move |_, x, y| {
            if let Ok(mut map) = map.try_borrow_mut() {
                map.pointer_move(x, y);
            }
            drawing_area.queue_draw();
        });
    }
    {
        let map = Rc::clone(map);
        let drawing_area = drawing_area.clone();
        motion.connect_leave(move |_| {
            if let Ok(mut map) = map.try_borrow_mut() {
                map.pointer_leave();
            }
            drawing_area.queue_draw();
        });
    }
    drawing_area.add_controller(motion);

    let scroll = gtk::EventControllerScroll::new(gtk::EventControllerScrollFlags::VERTICAL);
    {
        let map = Rc::clone(map);
        let drawing_area = drawing_area.clone();
        scroll.connect_scroll(move |_, _dx, dy| {
            if let Ok(mut map) = map.try_borrow_mut() {
                if dy < 0.0 {
                    map.zoom_in();
                } else if dy > 0.0 {
                    map.zoom_out();
                }
            }
            drawing_area.queue_draw();
            gtk::glib::Propagation::Stop
        });
    }
    drawing_area.add_controller(scroll);

    // Drag offsets are cumulative from the gesture start point.
    let drag = gtk::GestureDrag::new();
    let drag_start = Rc::new(Cell::new((0.0, 0.0)));
    {
        let map = Rc::clone(map);
        let drag_start = Rc::clone(&drag_start);
        drag.connect_drag_begin(move |_, start_x, start_y| {
            drag_start.set((start_x, start_y));
            if let Ok(mut map) = map.try_borrow_mut() {
                map.pan_start(start_x, start_y);
            }
        });
    }
    {
        let map = Rc::clone(map);
        let drawing_area = drawing_area.clone();
        let drag_start = Rc::clone(&drag_start);
        drag.connect_drag_update(move |_, offset_x, offset_y| {
            let (start_x, start_y) = drag_start.get();
            if let Ok(mut map) = map.try_borrow_mut() {
                if let Err(err) = map.pan_update(start_x + offset_x, start_y + offset_y) {
                    warn!(error = %err, "risk map pan failed");
                }
            }
            drawing_area.queue_draw();
        });
    }
    {
        let map = Rc::clone(map);
        let drawing_area = drawing_area.clone();
        drag.connect_drag_end(move |_, _, _| {
            if let Ok(mut map) = map.try_borrow_mut() {
                map.pan_end();
            }
            drawing_area.queue_draw();
        });
    }
    drawing_area.add_controller(drag);

    let click = gtk::GestureClick::new();
    {
        let map = Rc::clone(map);
        let selection_handler = Rc::clone(selection_handler);
        click.connect_released(move |_, _n_press, x, y| {
            let event = match map.try_borrow_mut() {
                Ok(mut map) => map.click(x, y),
                Err(_) => None,
            };
            let Some(event) = event else {
                return;
            };
            if let Ok(mut handler) = selection_handler.try_borrow_mut() {
                if let Some(handler) = handler.as_mut() {
                    handler(&event);
                }
            }
        });
    }
    drawing_area.add_controller(click);
}
