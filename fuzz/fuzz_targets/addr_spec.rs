#![no_main]

use rfc822_address::validate::AddrSpecValidator;
use rfc822_address_fuzz::impl_validate_target;

impl_validate_target!(AddrSpecValidator);
