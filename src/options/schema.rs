use crate::core::Schema;

pub(crate) const INDEX_OPTION: Schema = Schema {
    name: "option_index_option",
    path: "option/index_option",
    data_key: "index_option",
    columns: &[
        "Date",
        "Code",
        "WholeDayOpen",
        "WholeDayHigh",
        "WholeDayLow",
        "WholeDayClose",
        "NightSessionOpen",
        "NightSessionHigh",
        "NightSessionLow",
        "NightSessionClose",
        "DaySessionOpen",
        "DaySessionHigh",
        "DaySessionLow",
        "DaySessionClose",
        "Volume",
        "OpenInterest",
        "TurnoverValue",
        "ContractMonth",
        "StrikePrice",
        "Volume(OnlyAuction)",
        "EmergencyMarginTriggerDivision",
        "PutCallDivision",
        "LastTradingDay",
        "SpecialQuotationDay",
        "SettlementPrice",
        "TheoreticalPrice",
        "BaseVolatility",
        "UnderlyingPrice",
        "ImpliedVolatility",
        "InterestRate",
    ],
    extended: None,
    date_columns: &["Date", "LastTradingDay", "SpecialQuotationDay"],
    sort_keys: &["Date", "Code"],
};
