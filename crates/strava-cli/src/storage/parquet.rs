//! Parquet read/write for the normalized activity dataset
//!
//! Uses Arrow record batches for columnar storage. The whole dataset lives
//! in one file, rewritten atomically per ingest run.

use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;

use arrow::array::*;
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use arrow::record_batch::RecordBatch;
use chrono::{DateTime, NaiveDate};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::error::{Result, StravaError};
use crate::models::{ActivityRecord, NormalizedActivity};

/// Write the dataset to a Parquet file atomically (temp file + rename)
pub(crate) fn write_activities(path: &Path, activities: &[NormalizedActivity]) -> Result<()> {
    let batch = activities_to_batch(activities)?;
    let temp_path = path.with_extension("parquet.tmp");

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| StravaError::storage(format!("Failed to create directory: {}", e)))?;
    }

    let file = File::create(&temp_path)
        .map_err(|e| StravaError::storage(format!("Failed to create temp file: {}", e)))?;

    let props = WriterProperties::builder()
        .set_compression(Compression::ZSTD(Default::default()))
        .build();

    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))
        .map_err(|e| StravaError::storage(format!("Failed to create Parquet writer: {}", e)))?;

    writer
        .write(&batch)
        .map_err(|e| StravaError::storage(format!("Failed to write batch: {}", e)))?;

    writer
        .close()
        .map_err(|e| StravaError::storage(format!("Failed to close writer: {}", e)))?;

    fs::rename(&temp_path, path)
        .map_err(|e| StravaError::storage(format!("Failed to rename temp file: {}", e)))?;

    Ok(())
}

/// Read the full dataset from a Parquet file
pub(crate) fn read_activities(path: &Path) -> Result<Vec<NormalizedActivity>> {
    let file = File::open(path)
        .map_err(|e| StravaError::storage(format!("Failed to open {:?}: {}", path, e)))?;

    let reader = ParquetRecordBatchReaderBuilder::try_new(file)
        .map_err(|e| StravaError::storage(format!("Failed to create reader: {}", e)))?
        .build()
        .map_err(|e| StravaError::storage(format!("Failed to build reader: {}", e)))?;

    let batches: Vec<RecordBatch> = reader
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| StravaError::storage(format!("Failed to read batches: {}", e)))?;

    let mut activities = Vec::new();
    for batch in batches {
        activities.extend(batch_to_activities(&batch)?);
    }
    Ok(activities)
}

fn activities_to_batch(activities: &[NormalizedActivity]) -> Result<RecordBatch> {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();

    let id: Int64Array = activities.iter().map(|a| a.record.id).collect();
    let name: StringArray = activities.iter().map(|a| a.record.name.as_deref()).collect();
    let sport_type: StringArray = activities
        .iter()
        .map(|a| Some(a.sport_type.as_str()))
        .collect();
    let start_date_local: TimestampMicrosecondArray = activities
        .iter()
        .map(|a| Some(a.start_time.and_utc().timestamp_micros()))
        .collect();
    let distance: Float64Array = activities.iter().map(|a| a.record.distance).collect();
    let moving_time: Float64Array = activities.iter().map(|a| a.record.moving_time).collect();
    let total_elevation_gain: Float64Array = activities
        .iter()
        .map(|a| a.record.total_elevation_gain)
        .collect();
    let gear_id: StringArray = activities
        .iter()
        .map(|a| a.record.gear_id.as_deref())
        .collect();
    let distance_km: Float64Array = activities.iter().map(|a| a.distance_km).collect();
    let moving_hours: Float64Array = activities.iter().map(|a| a.moving_hours).collect();
    let date: Date32Array = activities
        .iter()
        .map(|a| Some((a.date - epoch).num_days() as i32))
        .collect();
    let year: Int32Array = activities.iter().map(|a| Some(a.year)).collect();
    let week: UInt32Array = activities.iter().map(|a| Some(a.week)).collect();

    let schema = Arc::new(Schema::new(vec![
        Field::new("id", DataType::Int64, true),
        Field::new("name", DataType::Utf8, true),
        Field::new("sport_type", DataType::Utf8, false),
        Field::new(
            "start_date_local",
            DataType::Timestamp(TimeUnit::Microsecond, None),
            false,
        ),
        Field::new("distance", DataType::Float64, true),
        Field::new("moving_time", DataType::Float64, true),
        Field::new("total_elevation_gain", DataType::Float64, true),
        Field::new("gear_id", DataType::Utf8, true),
        Field::new("distance_km", DataType::Float64, true),
        Field::new("moving_hours", DataType::Float64, true),
        Field::new("date", DataType::Date32, false),
        Field::new("year", DataType::Int32, false),
        Field::new("week", DataType::UInt32, false),
    ]));

    RecordBatch::try_new(
        schema,
        vec![
            Arc::new(id),
            Arc::new(name),
            Arc::new(sport_type),
            Arc::new(start_date_local),
            Arc::new(distance),
            Arc::new(moving_time),
            Arc::new(total_elevation_gain),
            Arc::new(gear_id),
            Arc::new(distance_km),
            Arc::new(moving_hours),
            Arc::new(date),
            Arc::new(year),
            Arc::new(week),
        ],
    )
    .map_err(|e| StravaError::storage(format!("Failed to create record batch: {}", e)))
}

fn batch_to_activities(batch: &RecordBatch) -> Result<Vec<NormalizedActivity>> {
    let len = batch.num_rows();
    let mut activities = Vec::with_capacity(len);

    let id = batch.column(0).as_any().downcast_ref::<Int64Array>().unwrap();
    let name = batch.column(1).as_any().downcast_ref::<StringArray>().unwrap();
    let sport_type = batch.column(2).as_any().downcast_ref::<StringArray>().unwrap();
    let start_date_local = batch
        .column(3)
        .as_any()
        .downcast_ref::<TimestampMicrosecondArray>()
        .unwrap();
    let distance = batch.column(4).as_any().downcast_ref::<Float64Array>().unwrap();
    let moving_time = batch.column(5).as_any().downcast_ref::<Float64Array>().unwrap();
    let total_elevation_gain = batch.column(6).as_any().downcast_ref::<Float64Array>().unwrap();
    let gear_id = batch.column(7).as_any().downcast_ref::<StringArray>().unwrap();
    let distance_km = batch.column(8).as_any().downcast_ref::<Float64Array>().unwrap();
    let moving_hours = batch.column(9).as_any().downcast_ref::<Float64Array>().unwrap();
    let date = batch.column(10).as_any().downcast_ref::<Date32Array>().unwrap();
    let year = batch.column(11).as_any().downcast_ref::<Int32Array>().unwrap();
    let week = batch.column(12).as_any().downcast_ref::<UInt32Array>().unwrap();

    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();

    for i in 0..len {
        let start_time = DateTime::from_timestamp_micros(start_date_local.value(i))
            .map(|t| t.naive_utc())
            .unwrap_or_default();
        let resolved_sport = sport_type.value(i).to_string();

        let record = ActivityRecord {
            id: id.is_valid(i).then(|| id.value(i)),
            name: name.is_valid(i).then(|| name.value(i).to_string()),
            sport_type: Some(resolved_sport.clone()),
            activity_type: None,
            start_date_local: Some(start_time.format("%Y-%m-%dT%H:%M:%S").to_string()),
            distance: distance.is_valid(i).then(|| distance.value(i)),
            moving_time: moving_time.is_valid(i).then(|| moving_time.value(i)),
            total_elevation_gain: total_elevation_gain
                .is_valid(i)
                .then(|| total_elevation_gain.value(i)),
            gear_id: gear_id.is_valid(i).then(|| gear_id.value(i).to_string()),
        };

        activities.push(NormalizedActivity {
            record,
            sport_type: resolved_sport,
            start_time,
            distance_km: distance_km.is_valid(i).then(|| distance_km.value(i)),
            moving_hours: moving_hours.is_valid(i).then(|| moving_hours.value(i)),
            date: epoch + chrono::Duration::days(date.value(i) as i64),
            year: year.value(i),
            week: week.value(i),
        });
    }

    Ok(activities)
}
