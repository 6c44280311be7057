use crate::domain::ports::GreetingSource;

#[derive(Debug, Clone, Copy, Default)]
pub struct HelloUtil;

impl HelloUtil {
    pub const HELLO: &'static str = "hello";
}

impl GreetingSource for HelloUtil {
    fn greeting(&self) -> &str {
        Self::HELLO
    }
}
