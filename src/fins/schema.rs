use crate::core::Schema;

const DISCLOSURE_ORDER: &[&str] = &["DisclosedDate", "DisclosedTime", "DisclosureNumber"];

pub(crate) const STATEMENTS: Schema = Schema {
    name: "fins_statements",
    path: "fins/statements",
    data_key: "statements",
    columns: &[
        "DisclosedDate",
        "DisclosedTime",
        "LocalCode",
        "DisclosureNumber",
        "TypeOfDocument",
        "TypeOfCurrentPeriod",
        "CurrentPeriodStartDate",
        "CurrentPeriodEndDate",
        "CurrentFiscalYearStartDate",
        "CurrentFiscalYearEndDate",
        "NextFiscalYearStartDate",
        "NextFiscalYearEndDate",
        "NetSales",
        "OperatingProfit",
        "OrdinaryProfit",
        "Profit",
        "EarningsPerShare",
        "DilutedEarningsPerShare",
        "TotalAssets",
        "Equity",
        "EquityToAssetRatio",
        "BookValuePerShare",
        "CashFlowsFromOperatingActivities",
        "CashFlowsFromInvestingActivities",
        "CashFlowsFromFinancingActivities",
        "CashAndEquivalents",
        "ResultDividendPerShare1stQuarter",
        "ResultDividendPerShare2ndQuarter",
        "ResultDividendPerShare3rdQuarter",
        "ResultDividendPerShareFiscalYearEnd",
        "ResultDividendPerShareAnnual",
        "DistributionsPerUnit(REIT)",
        "ResultTotalDividendPaidAnnual",
        "ResultPayoutRatioAnnual",
        "ForecastDividendPerShare1stQuarter",
        "ForecastDividendPerShare2ndQuarter",
        "ForecastDividendPerShare3rdQuarter",
        "ForecastDividendPerShareFiscalYearEnd",
        "ForecastDividendPerShareAnnual",
        "ForecastDistributionsPerUnit(REIT)",
        "ForecastTotalDividendPaidAnnual",
        "ForecastPayoutRatioAnnual",
        "NextYearForecastDividendPerShare1stQuarter",
        "NextYearForecastDividendPerShare2ndQuarter",
        "NextYearForecastDividendPerShare3rdQuarter",
        "NextYearForecastDividendPerShareFiscalYearEnd",
        "NextYearForecastDividendPerShareAnnual",
        "NextYearForecastDistributionsPerUnit(REIT)",
        "NextYearForecastPayoutRatioAnnual",
        "ForecastNetSales2ndQuarter",
        "ForecastOperatingProfit2ndQuarter",
        "ForecastOrdinaryProfit2ndQuarter",
        "ForecastProfit2ndQuarter",
        "ForecastEarningsPerShare2ndQuarter",
        "NextYearForecastNetSales2ndQuarter",
        "NextYearForecastOperatingProfit2ndQuarter",
        "NextYearForecastOrdinaryProfit2ndQuarter",
        "NextYearForecastProfit2ndQuarter",
        "NextYearForecastEarningsPerShare2ndQuarter",
        "ForecastNetSales",
        "ForecastOperatingProfit",
        "ForecastOrdinaryProfit",
        "ForecastProfit",
        "ForecastEarningsPerShare",
        "NextYearForecastNetSales",
        "NextYearForecastOperatingProfit",
        "NextYearForecastOrdinaryProfit",
        "NextYearForecastProfit",
        "NextYearForecastEarningsPerShare",
        "MaterialChangesInSubsidiaries",
        "ChangesBasedOnRevisionsOfAccountingStandard",
        "ChangesOtherThanOnesBasedOnRevisionsOfAccountingStandard",
        "ChangesInAccountingEstimates",
        "RetrospectiveRestatement",
        "NumberOfIssuedAndOutstandingSharesAtTheEndOfFiscalYearIncludingTreasuryStock",
        "NumberOfTreasuryStockAtTheEndOfFiscalYear",
        "AverageNumberOfShares",
        "NonConsolidatedNetSales",
        "NonConsolidatedOperatingProfit",
        "NonConsolidatedOrdinaryProfit",
        "NonConsolidatedProfit",
        "NonConsolidatedEarningsPerShare",
        "NonConsolidatedTotalAssets",
        "NonConsolidatedEquity",
        "NonConsolidatedEquityToAssetRatio",
        "NonConsolidatedBookValuePerShare",
    ],
    extended: None,
    date_columns: &[
        "DisclosedDate",
        "CurrentPeriodStartDate",
        "CurrentPeriodEndDate",
        "CurrentFiscalYearStartDate",
        "CurrentFiscalYearEndDate",
        "NextFiscalYearStartDate",
        "NextFiscalYearEndDate",
    ],
    sort_keys: DISCLOSURE_ORDER,
};

pub(crate) const FS_DETAILS: Schema = Schema {
    name: "fins_fs_details",
    path: "fins/fs_details",
    data_key: "fs_details",
    columns: &[
        "DisclosedDate",
        "DisclosedTime",
        "LocalCode",
        "DisclosureNumber",
        "TypeOfDocument",
        "FinancialStatement",
    ],
    extended: None,
    date_columns: &["DisclosedDate"],
    sort_keys: DISCLOSURE_ORDER,
};

pub(crate) const DIVIDEND: Schema = Schema {
    name: "fins_dividend",
    path: "fins/dividend",
    data_key: "dividend",
    columns: &[
        "AnnouncementDate",
        "AnnouncementTime",
        "Code",
        "ReferenceNumber",
        "StatusCode",
        "BoardMeetingDate",
        "InterimFinalCode",
        "ForecastResultCode",
        "InterimFinalTerm",
        "GrossDividendRate",
        "RecordDate",
        "ExDate",
        "ActualRecordDate",
        "PayableDate",
        "CAReferenceNumber",
        "DistributionAmount",
        "RetainedEarnings",
        "DeemedDividend",
        "DeemedCapitalGains",
        "NetAssetDecreaseRatio",
        "CommemorativeSpecialCode",
        "CommemorativeDividendRate",
        "SpecialDividendRate",
    ],
    extended: None,
    // the other date fields may hold "-" while undecided, so they stay text
    date_columns: &["AnnouncementDate", "BoardMeetingDate"],
    sort_keys: &["Code", "AnnouncementDate", "AnnouncementTime"],
};

pub(crate) const ANNOUNCEMENT: Schema = Schema {
    name: "fins_announcement",
    path: "fins/announcement",
    data_key: "announcement",
    columns: &[
        "Date",
        "Code",
        "CompanyName",
        "FiscalYear",
        "SectorName",
        "FiscalQuarter",
        "Section",
    ],
    extended: None,
    date_columns: &["Date"],
    sort_keys: &["Date", "Code"],
};
