use crate::core::Schema;

pub(crate) const TRADES_SPEC: Schema = Schema {
    name: "markets_trades_spec",
    path: "markets/trades_spec",
    data_key: "trades_spec",
    columns: &[
        "PublishedDate",
        "StartDate",
        "EndDate",
        "Section",
        "ProprietarySales",
        "ProprietaryPurchases",
        "ProprietaryTotal",
        "ProprietaryBalance",
        "BrokerageSales",
        "BrokeragePurchases",
        "BrokerageTotal",
        "BrokerageBalance",
        "TotalSales",
        "TotalPurchases",
        "TotalTotal",
        "TotalBalance",
        "IndividualsSales",
        "IndividualsPurchases",
        "IndividualsTotal",
        "IndividualsBalance",
        "ForeignersSales",
        "ForeignersPurchases",
        "ForeignersTotal",
        "ForeignersBalance",
        "SecuritiesCosSales",
        "SecuritiesCosPurchases",
        "SecuritiesCosTotal",
        "SecuritiesCosBalance",
        "InvestmentTrustsSales",
        "InvestmentTrustsPurchases",
        "InvestmentTrustsTotal",
        "InvestmentTrustsBalance",
        "BusinessCosSales",
        "BusinessCosPurchases",
        "BusinessCosTotal",
        "BusinessCosBalance",
        "OtherCosSales",
        "OtherCosPurchases",
        "OtherCosTotal",
        "OtherCosBalance",
        "InsuranceCosSales",
        "InsuranceCosPurchases",
        "InsuranceCosTotal",
        "InsuranceCosBalance",
        "CityBKsRegionalBKsEtcSales",
        "CityBKsRegionalBKsEtcPurchases",
        "CityBKsRegionalBKsEtcTotal",
        "CityBKsRegionalBKsEtcBalance",
        "TrustBanksSales",
        "TrustBanksPurchases",
        "TrustBanksTotal",
        "TrustBanksBalance",
        "OtherFinancialInstitutionsSales",
        "OtherFinancialInstitutionsPurchases",
        "OtherFinancialInstitutionsTotal",
        "OtherFinancialInstitutionsBalance",
    ],
    extended: None,
    date_columns: &["PublishedDate", "StartDate", "EndDate"],
    sort_keys: &["PublishedDate", "Section"],
};

pub(crate) const WEEKLY_MARGIN_INTEREST: Schema = Schema {
    name: "markets_weekly_margin_interest",
    path: "markets/weekly_margin_interest",
    data_key: "weekly_margin_interest",
    columns: &[
        "Date",
        "Code",
        "ShortMarginTradeVolume",
        "LongMarginTradeVolume",
        "ShortNegotiableMarginTradeVolume",
        "LongNegotiableMarginTradeVolume",
        "ShortStandardizedMarginTradeVolume",
        "LongStandardizedMarginTradeVolume",
        "IssueType",
    ],
    extended: None,
    date_columns: &["Date"],
    sort_keys: &["Date", "Code"],
};

pub(crate) const SHORT_SELLING: Schema = Schema {
    name: "markets_short_selling",
    path: "markets/short_selling",
    data_key: "short_selling",
    columns: &[
        "Date",
        "Sector33Code",
        "SellingExcludingShortSellingTurnoverValue",
        "ShortSellingWithRestrictionsTurnoverValue",
        "ShortSellingWithoutRestrictionsTurnoverValue",
    ],
    extended: None,
    date_columns: &["Date"],
    sort_keys: &["Date", "Sector33Code"],
};

pub(crate) const BREAKDOWN: Schema = Schema {
    name: "markets_breakdown",
    path: "markets/breakdown",
    data_key: "breakdown",
    columns: &[
        "Date",
        "Code",
        "LongSellValue",
        "ShortSellWithoutMarginValue",
        "MarginSellNewValue",
        "MarginSellCloseValue",
        "LongBuyValue",
        "MarginBuyNewValue",
        "MarginBuyCloseValue",
        "LongSellVolume",
        "ShortSellWithoutMarginVolume",
        "MarginSellNewVolume",
        "MarginSellCloseVolume",
        "LongBuyVolume",
        "MarginBuyNewVolume",
        "MarginBuyCloseVolume",
    ],
    extended: None,
    date_columns: &["Date"],
    sort_keys: &["Code", "Date"],
};

pub(crate) const TRADING_CALENDAR: Schema = Schema {
    name: "markets_trading_calendar",
    path: "markets/trading_calendar",
    data_key: "trading_calendar",
    columns: &["Date", "HolidayDivision"],
    extended: None,
    date_columns: &["Date"],
    sort_keys: &["Date"],
};
