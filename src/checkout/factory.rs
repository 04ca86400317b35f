use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::service::BorrowerLedger;
use crate::core::domain::Configuration;

pub(crate) fn create_checkout_service(config: &Configuration) -> Box<dyn CheckoutService> {
    Box::new(BorrowerLedger::new(config))
}
