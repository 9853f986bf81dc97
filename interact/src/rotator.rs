// hero screenshot rotator
//
// cycles the hero screen background through a fixed list of images

pub const INTERVAL_MS: u32 = 2500;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[derive(Clone, Debug)]
pub struct Rotator {
    images: Vec<String>,
    index: usize,
}

impl Rotator {
    pub fn new<I, S>(images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Rotator {
            images: images.into_iter().map(Into::into).collect(),
            index: 0,
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    pub fn advance(&mut self) -> Option<&str> {
        if self.images.is_empty() {
            return None;
        }

        self.index = (self.index + 1) % self.images.len();
        self.current()
    }

    pub fn background(&self) -> Option<String> {
        self.current().map(|image| format!("url(\"{image}\")"))
    }
}
