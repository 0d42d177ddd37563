//! Vocabularies for shops.

use super::vocabulary::vocabulary;

vocabulary! {
    pub enum ShopFlag ("shop flag") {
        WillFight => "WILL_FIGHT",
        WillBankMoney => "WILL_BANK_MONEY",
    }
}
