#![no_main]

use rfc822_address::validate::MailboxListValidator;
use rfc822_address_fuzz::impl_validate_target;

impl_validate_target!(MailboxListValidator);
