use widgetry::math::{Point, Rect};
use widgetry::{Application, Button, Canvas, Checkbox, Dropdown, FrameInput, Scene, TextField, Theme};

struct Demo {
    name: TextField,
    enable_submit: Checkbox,
    submit: Button,
    color: Dropdown,
}

impl Demo {
    fn new(theme: &Theme) -> Demo {
        let colors = ["Red", "Green", "Blue", "Cyan", "Magenta", "Yellow", "Black"]
            .into_iter()
            .map(String::from)
            .collect();

        let mut enable_submit = theme.checkbox(Point::new(20.0, 76.0), 24.0, "Enable submit");
        enable_submit.set_checked(true);

        Demo {
            name: theme.text_field(Rect::from_xywh(20.0, 20.0, 260.0, 36.0), 24),
            enable_submit,
            submit: theme.button(Rect::from_xywh(20.0, 120.0, 120.0, 40.0), "Submit"),
            color: theme.dropdown(Rect::from_xywh(20.0, 180.0, 200.0, 36.0), colors),
        }
    }
}

impl Scene for Demo {
    fn update(&mut self, input: &FrameInput) -> bool {
        let changed = widgetry::update_all(
            &mut [&mut self.name, &mut self.enable_submit, &mut self.submit, &mut self.color],
            input
        );

        self.submit.set_enabled(self.enable_submit.is_checked());
        if self.submit.is_clicked(input) {
            log::info!(
                "submitted name {:?} with color {:?}",
                self.name.value(),
                self.color.selected_item().unwrap_or("none")
            );
        }

        changed
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        // the dropdown goes last so its open list covers everything else
        widgetry::draw_all(&[&self.name, &self.enable_submit, &self.submit, &self.color], canvas);
    }
}

fn main() -> widgetry::Result<()> {
    Application::new("widgetry", Demo::new(&Theme::default())).run()
}
