//! # 外部 API クライアント
//!
//! 上流 BIN データベース（binlist.net）との通信を担当する。

pub mod binlist;

pub use binlist::{
    BankRecord,
    BinRecord,
    BinlistClient,
    BinlistClientImpl,
    BinlistError,
    CountryRecord,
};
