pub mod use_ledger_checker;
