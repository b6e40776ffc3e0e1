pub mod form;
pub mod validator;

/// The external send operation, invoked only after a transfer validated.
pub trait SendCallback {
    fn send(&self, recipient_address: &str, amount: &str);
}

impl<F> SendCallback for F
where
    F: Fn(&str, &str),
{
    fn send(&self, recipient_address: &str, amount: &str) {
        self(recipient_address, amount)
    }
}
