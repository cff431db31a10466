use crate::config::{self, WindowConfig};
use crate::events::AppEvent;
use crate::gui::dial::{self, CairoSurface, Dial};
use crate::gui::theme::{self, SpeedColors};
use crate::gui::window;
use crate::labels::Labels;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

pub struct AppModel {
    pub dial: Rc<RefCell<Dial>>,
    pub labels: Rc<RefCell<Labels>>,
    pub window_config: WindowConfig,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Resize(i32, i32),
    Activate,
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Activate => AppMsg::Activate,
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (
        Dial,
        Labels,
        WindowConfig,
        async_channel::Receiver<AppEvent>,
    );
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some(model.window_config.title.as_str()),
            set_default_size: (model.window_config.width, model.window_config.height),
            add_css_class: "fandial-window",

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if window::is_activation_key(key) {
                        sender.input(AppMsg::Activate);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,
                set_focusable: true,
                add_css_class: "fandial-drawing-area",

                connect_resize[sender] => move |_, width, height| {
                    sender.input(AppMsg::Resize(width, height));
                },

                add_controller = gtk::GestureClick {
                    set_button: gtk::gdk::BUTTON_PRIMARY,
                    connect_released[sender] => move |_, _, _, _| {
                        sender.input(AppMsg::Activate);
                    }
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (dial, labels, window_config, rx) = init;

        theme::load_css();

        let model = AppModel {
            dial: Rc::new(RefCell::new(dial)),
            labels: Rc::new(RefCell::new(labels)),
            window_config,
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let dial_draw = model.dial.clone();
        let labels_draw = model.labels.clone();
        widgets
            .drawing_area
            .set_draw_func(move |_, cr, width, height| {
                let mut surface = CairoSurface::new(cr, width as f64, height as f64);
                if let Err(e) = dial::draw(&mut surface, &dial_draw.borrow(), &*labels_draw.borrow())
                {
                    log::error!("Drawing error: {}", e);
                }
            });

        let speed = model.dial.borrow().speed();
        window::announce(&model.drawing_area, &model.labels.borrow().text_for(speed));

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Resize(width, height) => {
                self.dial.borrow_mut().resize(width as f64, height as f64);
                self.drawing_area.queue_draw();
            }
            AppMsg::Activate => {
                let speed = self.dial.borrow_mut().activate();
                window::announce(&self.drawing_area, &self.labels.borrow().text_for(speed));
                self.drawing_area.queue_draw();
            }
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    *self.labels.borrow_mut() = Labels::from_config(&new_config);

                    match SpeedColors::from_bindings(&new_config.colors) {
                        Ok(colors) if colors != *self.dial.borrow().colors() => {
                            log::warn!("Color changes take effect after a restart")
                        }
                        Ok(_) => {}
                        Err(e) => log::warn!("Reloaded config has invalid colors: {}", e),
                    }

                    let speed = self.dial.borrow().speed();
                    window::announce(&self.drawing_area, &self.labels.borrow().text_for(speed));
                    self.drawing_area.queue_draw();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}
