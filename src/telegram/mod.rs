mod notifier;

pub use notifier::{Notifier, TelegramNotifier};
