mod notification_port;

pub use notification_port::NotificationPort;
