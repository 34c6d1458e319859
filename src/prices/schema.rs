use crate::core::{Schema, Variant};

pub(crate) const DAILY_QUOTES: Schema = Schema {
    name: "prices_daily_quotes",
    path: "prices/daily_quotes",
    data_key: "daily_quotes",
    columns: &[
        "Date",
        "Code",
        "Open",
        "High",
        "Low",
        "Close",
        "UpperLimit",
        "LowerLimit",
        "Volume",
        "TurnoverValue",
        "AdjustmentFactor",
        "AdjustmentOpen",
        "AdjustmentHigh",
        "AdjustmentLow",
        "AdjustmentClose",
        "AdjustmentVolume",
    ],
    // Premium plan adds the morning and afternoon sessions
    extended: Some(Variant {
        sentinel: "MorningClose",
        columns: &[
            "Date",
            "Code",
            "Open",
            "High",
            "Low",
            "Close",
            "UpperLimit",
            "LowerLimit",
            "Volume",
            "TurnoverValue",
            "AdjustmentFactor",
            "AdjustmentOpen",
            "AdjustmentHigh",
            "AdjustmentLow",
            "AdjustmentClose",
            "AdjustmentVolume",
            "MorningOpen",
            "MorningHigh",
            "MorningLow",
            "MorningClose",
            "MorningUpperLimit",
            "MorningLowerLimit",
            "MorningVolume",
            "MorningTurnoverValue",
            "MorningAdjustmentOpen",
            "MorningAdjustmentHigh",
            "MorningAdjustmentLow",
            "MorningAdjustmentClose",
            "MorningAdjustmentVolume",
            "AfternoonOpen",
            "AfternoonHigh",
            "AfternoonLow",
            "AfternoonClose",
            "AfternoonUpperLimit",
            "AfternoonLowerLimit",
            "AfternoonVolume",
            "AfternoonTurnoverValue",
            "AfternoonAdjustmentOpen",
            "AfternoonAdjustmentHigh",
            "AfternoonAdjustmentLow",
            "AfternoonAdjustmentClose",
            "AfternoonAdjustmentVolume",
        ],
    }),
    date_columns: &["Date"],
    sort_keys: &["Code", "Date"],
};

pub(crate) const PRICES_AM: Schema = Schema {
    name: "prices_prices_am",
    path: "prices/prices_am",
    data_key: "prices_am",
    columns: &[
        "Date",
        "Code",
        "MorningOpen",
        "MorningHigh",
        "MorningLow",
        "MorningClose",
        "MorningVolume",
        "MorningTurnoverValue",
    ],
    extended: None,
    date_columns: &["Date"],
    sort_keys: &["Code"],
};
