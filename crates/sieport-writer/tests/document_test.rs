//! End-to-end document assembly tests.

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use sieport_model::{
    Account, AccountBalance, Company, Dimension, DimensionObject, FiscalYear, Transaction,
    Verification, VerificationSeries,
};
use sieport_writer::{cp437, write_document, WriterConfig};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn config() -> WriterConfig {
    WriterConfig {
        generator: "sieport".to_owned(),
        generator_version: "0.1.0".to_owned(),
        generated_at: date(2015, 9, 21),
        generated_by: None,
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[test]
fn simple_document() {
    let mut company = Company::new().with_name("My company");
    company
        .add_verification_series(VerificationSeries::default())
        .unwrap()
        .add_account(Account::new(1511).with_name("Kundfordringar"))
        .unwrap()
        .add_account(Account::new(3741).with_name("Öresutjämning"))
        .unwrap();

    let verification = Verification::new("591000490")
        .with_date(date(2015, 1, 5))
        .with_transaction(
            Transaction::new()
                .with_account(company.account(1511).unwrap())
                .with_amount(dec!(-0.24)),
        )
        .with_transaction(
            Transaction::new()
                .with_account(company.account(3741).unwrap())
                .with_amount(dec!(0.24)),
        );
    company
        .verification_series_mut("A")
        .unwrap()
        .add_verification(verification)
        .unwrap();
    company.validate().unwrap();

    let output = write_document(&company, &config());

    let expected = concat!(
        "#FLAGGA 0\r\n",
        "#FORMAT PC8\r\n",
        "#SIETYP 4\r\n",
        "#PROGRAM sieport 0.1.0\r\n",
        "#GEN 20150921\r\n",
        "#FNAMN \"My company\"\r\n",
        "#KONTO 1511 Kundfordringar\r\n",
        "#KONTO 3741 Öresutjämning\r\n",
        "\r\n",
        "#VER A 591000490 20150105\r\n",
        "{\r\n",
        "    #TRANS 1511 {} -0.24 20150105\r\n",
        "    #TRANS 3741 {} 0.24 20150105\r\n",
        "}\r\n",
        "\r\n",
    );
    assert_eq!(output, cp437::encode(expected));

    // The non-ASCII account name leaves as single code page bytes.
    assert!(contains(&output, b"#KONTO 3741 \x99resutj\x84mning\r\n"));
}

#[test]
fn full_document() {
    let mut company = Company::new()
        .with_name("Example Firm AB")
        .with_company_number("555555-5555")
        .with_chart_of_accounts("EUBAS97");
    company
        .add_account(Account::new(1910).with_name("Kassa"))
        .unwrap()
        .add_account(Account::new(3010).with_name("Försäljning"))
        .unwrap()
        .add_dimension(Dimension::new(Dimension::COST_CENTRE))
        .unwrap()
        .add_dimension(Dimension::new(Dimension::PROJECT))
        .unwrap()
        .add_verification_series(VerificationSeries::default())
        .unwrap();

    company
        .dimension_mut(Dimension::COST_CENTRE)
        .unwrap()
        .add_object(
            DimensionObject::new(Dimension::COST_CENTRE, "North")
                .unwrap()
                .with_name("North region"),
        )
        .unwrap();
    company
        .dimension_mut(Dimension::PROJECT)
        .unwrap()
        .add_object(
            DimensionObject::new(Dimension::PROJECT, "42")
                .unwrap()
                .with_name("Solar"),
        )
        .unwrap();

    let mut year = FiscalYear::calendar_year(2015);
    year.add_account_balance(
        AccountBalance::new(company.account(1910).unwrap())
            .with_incoming(dec!(100.50))
            .with_outgoing(dec!(350.50)),
    )
    .unwrap();
    let mut previous = year.previous_year();
    previous
        .add_account_balance(
            AccountBalance::new(company.account(1910).unwrap()).with_outgoing(dec!(100.50)),
        )
        .unwrap();
    company.add_fiscal_year(year).add_fiscal_year(previous);

    let north = company
        .dimension(Dimension::COST_CENTRE)
        .unwrap()
        .object("North")
        .unwrap()
        .clone();
    let solar = company
        .dimension(Dimension::PROJECT)
        .unwrap()
        .object("42")
        .unwrap()
        .clone();

    let sale = Verification::new("1")
        .with_date(date(2015, 1, 5))
        .with_text("Sale")
        .with_registration_date(date(2015, 1, 10))
        .with_registration_sign("JD")
        .with_transaction(
            Transaction::new()
                .with_account(company.account(1910).unwrap())
                .with_amount(dec!(250.00))
                .with_date(date(2015, 1, 6))
                .with_text("Cash")
                .with_quantity(dec!(2))
                .with_object(&north)
                .unwrap()
                .with_object(&solar)
                .unwrap(),
        )
        .with_transaction(
            Transaction::new()
                .with_account(company.account(3010).unwrap())
                .with_amount(dec!(-250.00)),
        );
    let deferred = Verification::new("")
        .with_date(date(2015, 2, 1))
        .with_transaction(
            Transaction::new()
                .with_account(company.account(1910).unwrap())
                .with_amount(dec!(10)),
        )
        .with_transaction(
            Transaction::new()
                .with_account(company.account(3010).unwrap())
                .with_amount(dec!(-10)),
        );
    {
        let series = company.verification_series_mut("A").unwrap();
        series.add_verification(deferred).unwrap();
        series.add_verification(sale).unwrap();
    }
    company.validate().unwrap();

    let writer_config = WriterConfig {
        generated_by: Some("JD".to_owned()),
        ..config()
    };
    let output = write_document(&company, &writer_config);

    let expected = concat!(
        "#FLAGGA 0\r\n",
        "#FORMAT PC8\r\n",
        "#SIETYP 4\r\n",
        "#PROGRAM sieport 0.1.0\r\n",
        "#GEN 20150921 JD\r\n",
        "#FNAMN \"Example Firm AB\"\r\n",
        "#ORGNR 555555-5555\r\n",
        "#KPTYP EUBAS97\r\n",
        "#KONTO 1910 Kassa\r\n",
        "#KONTO 3010 Försäljning\r\n",
        "#OBJEKT 1 North \"North region\"\r\n",
        "#OBJEKT 6 42 Solar\r\n",
        "#RAR 0 20150101 20151231\r\n",
        "#RAR -1 20140101 20141231\r\n",
        "#IB 0 1910 100.50\r\n",
        "#UB 0 1910 350.50\r\n",
        "#IB -1 1910 0\r\n",
        "#UB -1 1910 100.50\r\n",
        "\r\n",
        "#VER A 1 20150105 Sale 20150110 JD\r\n",
        "{\r\n",
        "    #TRANS 1910 {1 North 6 42} 250.00 20150106 Cash 2\r\n",
        "    #TRANS 3010 {} -250.00 20150105\r\n",
        "}\r\n",
        "\r\n",
        "#VER A \"\" 20150201\r\n",
        "{\r\n",
        "    #TRANS 1910 {} 10 20150201\r\n",
        "    #TRANS 3010 {} -10 20150201\r\n",
        "}\r\n",
        "\r\n",
    );
    assert_eq!(output, cp437::encode(expected));
}

#[test]
fn interior_missing_fields_render_as_empty_tokens() {
    let mut company = Company::new().with_name("My company");
    company
        .add_account(Account::new(1910).with_name("Kassa"))
        .unwrap()
        .add_account(Account::new(3010).with_name("Sales"))
        .unwrap()
        .add_verification_series(VerificationSeries::default())
        .unwrap();

    // No text, no registration date, but a registration sign: the two
    // missing fields sit left of a set one and must stay on the line.
    let verification = Verification::new("7")
        .with_date(date(2015, 1, 5))
        .with_registration_sign("SG")
        .with_transaction(
            Transaction::new()
                .with_account(company.account(1910).unwrap())
                .with_amount(dec!(1.00)),
        )
        .with_transaction(
            Transaction::new()
                .with_account(company.account(3010).unwrap())
                .with_amount(dec!(-1.00)),
        );
    company
        .verification_series_mut("A")
        .unwrap()
        .add_verification(verification)
        .unwrap();
    company.validate().unwrap();

    let output = write_document(&company, &config());
    assert!(contains(&output, b"#VER A 7 20150105 \"\" \"\" SG\r\n"));
}
