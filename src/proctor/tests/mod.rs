mod fixture;
mod report_test;
